use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use video_player::command::CommandError;
use video_player::model::Catalog;
use video_player::{Command, PlayerConfig, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video catalog and playlist simulator", long_about = None)]
struct Args {
    /// Seed for PLAY_RANDOM (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Prompt shown before each command
    #[arg(long, default_value = "YT> ")]
    prompt: String,

    /// Echo each command after the prompt (for piped input)
    #[arg(long)]
    echo: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new()
        .with_prompt(args.prompt)
        .with_echo(args.echo);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut player = VideoPlayer::new(Catalog::sample(), &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Hello and welcome to YouTube, what would you like to do?")?;
    writeln!(
        stdout,
        "Enter HELP for list of available commands or EXIT to terminate."
    )?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            log::debug!("End of input");
            break;
        };
        let line = line.context("Failed to read command from stdin")?;
        if config.echo {
            writeln!(stdout, "{}", line)?;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                writeln!(
                    stdout,
                    "Please enter a valid command, type HELP for a list of available commands."
                )?;
                continue;
            }
        };

        if command == Command::Exit {
            break;
        }

        for output in player.execute(&command) {
            writeln!(stdout, "{}", output)?;
        }
    }

    writeln!(
        stdout,
        "YouTube has now terminated its execution. Thank you and goodbye!"
    )?;
    Ok(())
}

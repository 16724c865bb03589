//! Text command parsing
//!
//! One command per line: a keyword (any case) followed by whitespace
//! separated arguments, e.g. `ADD_TO_PLAYLIST my_list funny_dogs_video_id`.

use std::str::FromStr;
use thiserror::Error;

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    Help,
    Exit,
}

/// Why a line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Listing printed by the HELP command
pub const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let keyword = parts.next().ok_or(CommandError::Empty)?.to_uppercase();
        let args: Vec<&str> = parts.collect();

        // Check argument count, then hand the args out as owned strings
        let take = |command: &'static str, expected: usize| -> Result<Vec<String>, CommandError> {
            if args.len() != expected {
                return Err(CommandError::WrongArity {
                    command,
                    expected,
                    got: args.len(),
                });
            }
            Ok(args.iter().map(|a| a.to_string()).collect())
        };

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => {
                take("NUMBER_OF_VIDEOS", 0)?;
                Command::NumberOfVideos
            }
            "SHOW_ALL_VIDEOS" => {
                take("SHOW_ALL_VIDEOS", 0)?;
                Command::ShowAllVideos
            }
            "PLAY" => {
                let [video_id] = one(take("PLAY", 1)?);
                Command::Play(video_id)
            }
            "STOP" => {
                take("STOP", 0)?;
                Command::Stop
            }
            "PLAY_RANDOM" => {
                take("PLAY_RANDOM", 0)?;
                Command::PlayRandom
            }
            "PAUSE" => {
                take("PAUSE", 0)?;
                Command::Pause
            }
            "CONTINUE" => {
                take("CONTINUE", 0)?;
                Command::Continue
            }
            "SHOW_PLAYING" => {
                take("SHOW_PLAYING", 0)?;
                Command::ShowPlaying
            }
            "CREATE_PLAYLIST" => {
                let [name] = one(take("CREATE_PLAYLIST", 1)?);
                Command::CreatePlaylist(name)
            }
            "ADD_TO_PLAYLIST" => {
                let [playlist, video_id] = two(take("ADD_TO_PLAYLIST", 2)?);
                Command::AddToPlaylist { playlist, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let [playlist, video_id] = two(take("REMOVE_FROM_PLAYLIST", 2)?);
                Command::RemoveFromPlaylist { playlist, video_id }
            }
            "CLEAR_PLAYLIST" => {
                let [name] = one(take("CLEAR_PLAYLIST", 1)?);
                Command::ClearPlaylist(name)
            }
            "DELETE_PLAYLIST" => {
                let [name] = one(take("DELETE_PLAYLIST", 1)?);
                Command::DeletePlaylist(name)
            }
            "SHOW_PLAYLIST" => {
                let [name] = one(take("SHOW_PLAYLIST", 1)?);
                Command::ShowPlaylist(name)
            }
            "SHOW_ALL_PLAYLISTS" => {
                take("SHOW_ALL_PLAYLISTS", 0)?;
                Command::ShowAllPlaylists
            }
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword)),
        };

        Ok(command)
    }
}

fn one(args: Vec<String>) -> [String; 1] {
    let mut args = args.into_iter();
    [args.next().unwrap_or_default()]
}

fn two(args: Vec<String>) -> [String; 2] {
    let mut args = args.into_iter();
    [args.next().unwrap_or_default(), args.next().unwrap_or_default()]
}

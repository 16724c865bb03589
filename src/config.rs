//! Session configuration

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Seed for random play (None = seeded from the OS)
    pub seed: Option<u64>,

    /// Prompt shown before each command
    pub prompt: String,

    /// Echo each command back after the prompt (useful when input is piped)
    pub echo: bool,
}

impl PlayerConfig {
    /// Create a configuration with the default prompt
    pub fn new() -> Self {
        Self {
            seed: None,
            prompt: "YT> ".to_string(),
            echo: false,
        }
    }

    /// Use a fixed seed for random play
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Echo commands after the prompt
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Difficulty;
use tracing::{debug, info, instrument};

/// Settings for a batch of computer-vs-computer games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Difficulty of the player holding X.
    #[serde(default)]
    x_difficulty: Difficulty,

    /// Difficulty of the player holding O.
    #[serde(default)]
    o_difficulty: Difficulty,

    /// Whether X opens the first game. The opener alternates afterwards.
    #[serde(default = "default_x_first")]
    x_first: bool,

    /// Seed for reproducible runs. Unset means seeded from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_games() -> u32 {
    100
}

#[instrument]
fn default_x_first() -> bool {
    true
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            x_difficulty: Difficulty::default(),
            o_difficulty: Difficulty::default(),
            x_first: default_x_first(),
            seed: None,
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading arena config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(games = config.games, x = %config.x_difficulty, o = %config.o_difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Overrides the game count when given.
    pub fn with_games(mut self, games: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(games) = games {
            self.games = games;
        }
        self.validate()?;
        Ok(self)
    }

    /// Overrides the difficulties when given.
    pub fn with_difficulties(mut self, x: Option<Difficulty>, o: Option<Difficulty>) -> Self {
        if let Some(x) = x {
            self.x_difficulty = x;
        }
        if let Some(o) = o {
            self.o_difficulty = o;
        }
        self
    }

    /// Overrides the opener of the first game.
    pub fn with_x_first(mut self, x_first: bool) -> Self {
        self.x_first = x_first;
        self
    }

    /// Overrides the seed when given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Match configuration loaded from TOML and the environment.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::Game;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the first player's name.
pub const FIRST_PLAYER_VAR: &str = "NOUGHTS_FIRST_PLAYER";

/// Environment variable overriding the second player's name.
pub const SECOND_PLAYER_VAR: &str = "NOUGHTS_SECOND_PLAYER";

/// Settings for a hot-seat match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Name of the player who moves first and plays X.
    #[serde(default = "default_first_player")]
    first_player: String,

    /// Name of the player who plays O.
    #[serde(default = "default_second_player")]
    second_player: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_first_player() -> String {
    "Linus".to_string()
}

fn default_second_player() -> String {
    "Emily".to_string()
}

fn default_log_filter() -> String {
    "warn,noughts=info,noughts_cli=info".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_player: default_first_player(),
            second_player: default_second_player(),
            log_filter: default_log_filter(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text; missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(first = %config.first_player, second = %config.second_player, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies `NOUGHTS_FIRST_PLAYER` / `NOUGHTS_SECOND_PLAYER` from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies player-name overrides from an arbitrary variable lookup.
    #[instrument(skip_all)]
    pub fn apply_env_from(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.with_overrides(lookup(FIRST_PLAYER_VAR), lookup(SECOND_PLAYER_VAR))
    }

    /// Replaces player names with any that are given and non-blank.
    pub fn with_overrides(mut self, first: Option<String>, second: Option<String>) -> Self {
        if let Some(name) = first.filter(|n| !n.trim().is_empty()) {
            debug!(%name, "Overriding first player");
            self.first_player = name;
        }
        if let Some(name) = second.filter(|n| !n.trim().is_empty()) {
            debug!(%name, "Overriding second player");
            self.second_player = name;
        }
        self
    }

    /// Starts a fresh match with the configured players.
    pub fn new_game(&self) -> Game {
        Game::with_names(self.first_player.clone(), self.second_player.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.first_player.trim().is_empty() || self.second_player.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        Ok(())
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

//! Player settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Game settings.
///
/// Every field is optional in the file; missing fields take the defaults
/// (easy opponent, human plays crosses, panel hidden). Crosses always move
/// first, so a human playing noughts lets the computer open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with the hard-mode opponent enabled.
    hard_mode: bool,

    /// Marker used by the human.
    human_plays: Player,

    /// Start with the settings panel shown.
    show_settings: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hard_mode: false,
            human_plays: Player::Cross,
            show_settings: false,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads the given file, or [`DEFAULT_CONFIG_FILE`] if it exists, or defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    ///
    /// Flags can only switch features on; an absent flag keeps the file value.
    #[instrument]
    pub fn with_overrides(mut self, hard_mode: bool, human_plays: Option<Player>) -> Self {
        self.hard_mode |= hard_mode;
        if let Some(player) = human_plays {
            self.human_plays = player;
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("hard_mode = true").unwrap();
        assert!(*settings.hard_mode());
        assert!(!*settings.show_settings());
        assert_eq!(*settings.human_plays(), Player::Cross);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(true, Some(Player::Nought));
        assert!(*settings.hard_mode());
        assert_eq!(*settings.human_plays(), Player::Nought);
    }
}

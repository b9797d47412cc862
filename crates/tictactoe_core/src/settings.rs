//! Session settings, optionally loaded from a TOML file.
//!
//! ```toml
//! mode = "cpu"
//! computer_mark = "X"
//! thinking_delay_ms = 400
//! seed = 7
//! ```

use super::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    /// One seat is played by the computer.
    #[serde(rename = "cpu")]
    VsComputer,
}

impl Mode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::VsComputer => "Play vs Computer",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::PlayerVsPlayer => Self::VsComputer,
            Self::VsComputer => Self::PlayerVsPlayer,
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SessionSettings {
    /// Player-vs-player or play-vs-computer.
    #[serde(default)]
    mode: Mode,

    /// Mark the computer plays in [`Mode::VsComputer`].
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Mark that moves first after every reset.
    #[serde(default = "default_starting_mark")]
    starting_mark: Mark,

    /// Pause before the computer moves, for pacing only.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Fixed seed for the computer's tie-breaks; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_starting_mark() -> Mark {
    Mark::X
}

fn default_thinking_delay_ms() -> u64 {
    250
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            computer_mark: default_computer_mark(),
            starting_mark: default_starting_mark(),
            thinking_delay_ms: default_thinking_delay_ms(),
            seed: None,
        }
    }
}

impl SessionSettings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml_str(&content)?;
        info!(mode = ?settings.mode, computer_mark = %settings.computer_mark, "Settings loaded");
        Ok(settings)
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Game configuration.
//!
//! `GameConfig` collects the knobs a player can turn:
//! - `seed`: fixed RNG seed for a replayable game (random when `None`)
//! - `hints`: list every set on the board after a wrong guess
//! - `max_redeals`: consecutive redeals tried on a board without sets
//!
//! Values come from defaults, then an optional JSON file, then command-line
//! flags. The binary does the layering; this module only parses.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default limit for consecutive redeals of a board with no set.
pub const DEFAULT_MAX_REDEALS: u32 = 16;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// RNG seed. `None` draws a fresh seed at game start.
    pub seed: Option<u64>,

    /// Show hints after a wrong guess.
    pub hints: bool,

    /// Consecutive stalled-board redeals before the game is called.
    pub max_redeals: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hints: false,
            max_redeals: DEFAULT_MAX_REDEALS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable hints.
    #[must_use]
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Set the consecutive redeal limit.
    #[must_use]
    pub fn with_max_redeals(mut self, max_redeals: u32) -> Self {
        self.max_redeals = max_redeals;
        self
    }

    /// Parse a configuration from JSON text.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&text)
    }
}

/// Failure to read or parse a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: String, message: String },
    /// The file is not a valid configuration.
    Parse { message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "cannot read config '{}': {}", path, message)
            }
            ConfigError::Parse { message } => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

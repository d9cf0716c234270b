//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order of precedence:
//! 1. `$CUBEWORK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/cubework/config.toml`
//! 3. `~/.cubework/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., the default game must be a valid game name).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::{GameName, ScrambleCounting};

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// default_game = "default"
/// data_dir = "/home/me/cubes"
///
/// [scramble]
/// moves = 20
/// counting = "preserve"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Game used when `--game` is not given
    pub default_game: Option<String>,

    /// Directory holding saved games
    pub data_dir: Option<PathBuf>,

    /// Scramble defaults
    pub scramble: Option<ScrambleDefaults>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(game) = &self.default_game {
            GameName::new(game.as_str()).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid default game: {}", e))
            })?;
        }

        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "data_dir cannot be empty".to_string(),
                ));
            }
        }

        if let Some(scramble) = &self.scramble {
            scramble.validate()?;
        }

        Ok(())
    }
}

/// Scramble command defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleDefaults {
    /// Number of random turns
    pub moves: Option<usize>,

    /// Move-counter policy
    pub counting: Option<ScrambleCounting>,
}

impl ScrambleDefaults {
    /// Largest accepted scramble length.
    pub const MAX_MOVES: usize = 1000;

    /// Validate the scramble defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(moves) = self.moves {
            if moves == 0 || moves > Self::MAX_MOVES {
                return Err(ConfigError::InvalidValue(format!(
                    "scramble.moves must be between 1 and {}, got {}",
                    Self::MAX_MOVES,
                    moves
                )));
            }
        }
        Ok(())
    }
}

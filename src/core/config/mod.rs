//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! cubework has a single user-level configuration file. CLI flags take
//! precedence over it; built-in defaults apply where it is silent.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$CUBEWORK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/cubework/config.toml`
//! 3. `~/.cubework/config.toml`
//!
//! `cube config set` writes back to whichever file was loaded. With no file,
//! it creates `$CUBEWORK_CONFIG` or `~/.cubework/config.toml`.
//!
//! # Example
//!
//! ```no_run
//! use cubework::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! let config = result.config;
//!
//! println!("Default game: {}", config.default_game());
//! println!("Scramble length: {}", config.scramble_moves());
//! println!("Counting: {}", config.scramble_counting());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, ScrambleDefaults};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::{GameName, ScrambleCounting};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CUBEWORK_CONFIG";

/// Scramble length used when neither CLI nor config specify one.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 20;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    global_path: Option<PathBuf>,
}

impl Config {
    /// Keys understood by [`Config::get_value`] and [`Config::set_value`].
    pub const KEYS: &'static [&'static str] = &[
        "default_game",
        "data_dir",
        "scramble.moves",
        "scramble.counting",
    ];

    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error (defaults are used).
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path) = Self::load_global()?;
        global.validate()?;

        Ok(ConfigLoadResult {
            config: Config {
                global,
                global_path,
            },
        })
    }

    /// Load configuration from one explicit file.
    pub fn load_from(path: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let global = Self::read_global_config(path)?;
        global.validate()?;

        Ok(ConfigLoadResult {
            config: Config {
                global,
                global_path: Some(path.to_path_buf()),
            },
        })
    }

    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $CUBEWORK_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/cubework/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("cubework/config.toml");
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.cubework/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".cubework/config.toml");
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Canonical location for a new config file.
    ///
    /// `$CUBEWORK_CONFIG` when set, otherwise `~/.cubework/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".cubework/config.toml"))
    }

    /// Where [`Config::save`] writes: the file this config was loaded from,
    /// or [`Config::global_config_path`] when none was found.
    pub fn write_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.global_path {
            Some(path) => Ok(path.clone()),
            None => Self::global_config_path(),
        }
    }

    /// Set a dotted key on this config. Nothing changes if the result is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut global = self.global.clone();
        Self::set_value(&mut global, key, value)?;
        self.global = global;
        Ok(())
    }

    /// Write the global config atomically back to [`Config::write_path`].
    ///
    /// Later loads read the same file, so the written values take effect.
    pub fn save(&mut self) -> Result<PathBuf, ConfigError> {
        let path = self.write_path()?;
        Self::write_config_atomic(&path, &self.global)?;
        self.global_path = Some(path.clone());
        Ok(path)
    }

    /// Write a config file atomically (temp file, then rename).
    pub fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let result = write_synced(&temp_path, contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })
            .and_then(|()| {
                fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
                    path: path.to_path_buf(),
                    source: e,
                })
            });

        if result.is_err() {
            fs::remove_file(&temp_path).ok();
        }
        result
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// The game used when none is named.
    ///
    /// Defaults to `default`. The name was validated on load.
    pub fn default_game(&self) -> GameName {
        self.global
            .default_game
            .as_deref()
            .and_then(|name| GameName::new(name).ok())
            .unwrap_or_default()
    }

    /// Configured data directory, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.global.data_dir.as_deref()
    }

    /// Scramble length. Defaults to 20.
    pub fn scramble_moves(&self) -> usize {
        self.global
            .scramble
            .as_ref()
            .and_then(|s| s.moves)
            .unwrap_or(DEFAULT_SCRAMBLE_MOVES)
    }

    /// Scramble counter policy. Defaults to [`ScrambleCounting::Preserve`].
    pub fn scramble_counting(&self) -> ScrambleCounting {
        self.global
            .scramble
            .as_ref()
            .and_then(|s| s.counting)
            .unwrap_or_default()
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    // =========================================================================
    // Key-based access for `cube config`
    // =========================================================================

    /// Effective value of a dotted key, with defaults applied.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "default_game" => Ok(self.default_game().to_string()),
            "data_dir" => Ok(self
                .data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "scramble.moves" => Ok(self.scramble_moves().to_string()),
            "scramble.counting" => Ok(self.scramble_counting().to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a dotted key on `global`, validating the result.
    pub fn set_value(global: &mut GlobalConfig, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_game" => global.default_game = Some(value.to_string()),
            "data_dir" => global.data_dir = Some(PathBuf::from(value)),
            "scramble.moves" => {
                let moves = value.parse::<usize>().map_err(|_| {
                    ConfigError::InvalidValue(format!("scramble.moves must be a number, got '{}'", value))
                })?;
                global.scramble.get_or_insert_with(Default::default).moves = Some(moves);
            }
            "scramble.counting" => {
                let counting = value.parse::<ScrambleCounting>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "scramble.counting must be increment, preserve or reset, got '{}'",
                        value
                    ))
                })?;
                global.scramble.get_or_insert_with(Default::default).counting = Some(counting);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        global.validate()
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.default_game().as_str(), "default");
        assert!(config.data_dir().is_none());
        assert_eq!(config.scramble_moves(), 20);
        assert_eq!(config.scramble_counting(), ScrambleCounting::Preserve);
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
            default_game = "practice"

            [scramble]
            moves = 30
            counting = "increment"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap().config;

        assert_eq!(config.default_game().as_str(), "practice");
        assert_eq!(config.scramble_moves(), 30);
        assert_eq!(config.scramble_counting(), ScrambleCounting::Increment);
        assert_eq!(config.loaded_from(), Some(config_path.as_path()));
    }

    #[test]
    fn invalid_game_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "default_game = \"no spaces allowed\"").unwrap();

        assert!(matches!(
            Config::load_from(&config_path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "colour_scheme = \"dark\"").unwrap();

        assert!(matches!(
            Config::load_from(&config_path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn write_atomic_then_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let mut global = GlobalConfig::default();
        Config::set_value(&mut global, "scramble.moves", "42").unwrap();
        Config::set_value(&mut global, "scramble.counting", "reset").unwrap();
        Config::write_config_atomic(&path, &global).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        let config = Config::load_from(&path).unwrap().config;
        assert_eq!(config.scramble_moves(), 42);
        assert_eq!(config.scramble_counting(), ScrambleCounting::Reset);
    }

    #[test]
    fn save_writes_back_to_loaded_file() {
        let temp = TempDir::new().unwrap();
        let xdg_path = temp.path().join("xdg/cubework/config.toml");
        fs::create_dir_all(xdg_path.parent().unwrap()).unwrap();
        fs::write(&xdg_path, "[scramble]\nmoves = 20\n").unwrap();

        let mut config = Config::load_from(&xdg_path).unwrap().config;
        config.set("scramble.moves", "7").unwrap();
        let written = config.save().unwrap();

        assert_eq!(written, xdg_path);
        let reloaded = Config::load_from(&xdg_path).unwrap().config;
        assert_eq!(reloaded.scramble_moves(), 7);
    }

    #[test]
    fn set_rejects_invalid_without_changing() {
        let mut config = Config::default();
        assert!(config.set("scramble.counting", "twice").is_err());
        assert!(config.set("scramble.moves", "0").is_err());
        assert_eq!(config.scramble_counting(), ScrambleCounting::Preserve);
        assert_eq!(config.scramble_moves(), 20);
    }

    #[test]
    fn set_value_validates() {
        let mut global = GlobalConfig::default();
        assert!(Config::set_value(&mut global, "scramble.moves", "zero").is_err());
        assert!(Config::set_value(&mut global, "scramble.moves", "0").is_err());
        assert!(Config::set_value(&mut global, "scramble.counting", "twice").is_err());
        assert!(matches!(
            Config::set_value(&mut global, "colour", "red"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn get_value_applies_defaults() {
        let config = Config::default();
        assert_eq!(config.get_value("scramble.moves").unwrap(), "20");
        assert_eq!(config.get_value("scramble.counting").unwrap(), "preserve");
        assert_eq!(config.get_value("data_dir").unwrap(), "");
        assert!(config.get_value("nope").is_err());
        for key in Config::KEYS {
            assert!(config.get_value(key).is_ok(), "{key}");
        }
    }
}

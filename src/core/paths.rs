//! core::paths
//!
//! Centralized path routing for cubework storage locations.
//!
//! # Resolution
//!
//! The data directory is chosen in this order:
//! 1. `--data-dir` on the command line
//! 2. `data_dir` in the config file
//! 3. `$CUBEWORK_DATA_DIR`
//! 4. `<platform data dir>/cubework` (via `dirs::data_dir`)
//!
//! **Hard rule:** no code outside this module joins storage paths by hand.
//!
//! # Storage Layout
//!
//! - `games/` - one `<name>.json` per saved game
//!
//! # Example
//!
//! ```
//! use cubework::core::paths::CubePaths;
//! use cubework::core::types::GameName;
//! use std::path::PathBuf;
//!
//! let paths = CubePaths::new(PathBuf::from("/data/cubework"));
//! let game = GameName::new("practice").unwrap();
//!
//! assert_eq!(
//!     paths.game_path(&game),
//!     PathBuf::from("/data/cubework/games/practice.json")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::GameName;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CUBEWORK_DATA_DIR";

/// Centralized path routing for cubework storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubePaths {
    /// Root of all cubework data.
    pub data_dir: PathBuf,
}

impl CubePaths {
    /// Create paths rooted at an explicit data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory from the CLI flag and config value.
    ///
    /// Returns `None` only when no source yields a directory (no flag, no
    /// config, no env var, and no platform data dir).
    pub fn resolve(cli_dir: Option<&Path>, config_dir: Option<&Path>) -> Option<Self> {
        if let Some(dir) = cli_dir.or(config_dir) {
            return Some(Self::new(dir.to_path_buf()));
        }

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Some(Self::new(PathBuf::from(dir)));
            }
        }

        dirs::data_dir().map(|dir| Self::new(dir.join("cubework")))
    }

    /// Directory holding saved games.
    ///
    /// This is `<data_dir>/games/`.
    pub fn games_dir(&self) -> PathBuf {
        self.data_dir.join("games")
    }

    /// Path of one saved game.
    ///
    /// This is `<data_dir>/games/<name>.json`.
    pub fn game_path(&self, name: &GameName) -> PathBuf {
        self.games_dir().join(format!("{}.json", name))
    }

    /// Ensure the directory structure exists.
    ///
    /// # Errors
    ///
    /// Returns an IO error if directory creation fails.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.games_dir())
    }
}

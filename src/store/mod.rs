//! store
//!
//! Saved games on disk.
//!
//! # Architecture
//!
//! Each game lives in `<data_dir>/games/<name>.json`. Locations come from
//! [`CubePaths`]; this module never joins paths itself. Writes go to a
//! temp file that is synced and renamed over the target, so a crash leaves
//! either the old document or the new one.
//!
//! # Example
//!
//! ```
//! use cubework::core::paths::CubePaths;
//! use cubework::core::types::GameName;
//! use cubework::store::{GameStore, schema::GameRecordV1};
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let store = GameStore::new(CubePaths::new(dir.path().to_path_buf()));
//! let name = GameName::new("practice").unwrap();
//!
//! store.write(&GameRecordV1::new(&name)).unwrap();
//! assert!(store.read(&name).unwrap().is_some());
//! assert_eq!(store.list().unwrap(), vec![name]);
//! ```

pub mod schema;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::paths::CubePaths;
use crate::core::types::GameName;
use schema::{parse_game, GameRecordV1, SchemaError};

/// Errors from game storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a game to JSON.
    #[error("failed to serialize game: {0}")]
    SerializeError(String),

    /// The stored document is not a valid game.
    #[error("invalid game file '{path}': {source}")]
    Invalid { path: PathBuf, source: SchemaError },

    /// The record itself failed validation before writing.
    #[error("game error: {0}")]
    Schema(#[from] SchemaError),
}

/// File-backed store of saved games.
#[derive(Debug, Clone)]
pub struct GameStore {
    paths: CubePaths,
}

impl GameStore {
    /// Create a store over the given data directory.
    pub fn new(paths: CubePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &CubePaths {
        &self.paths
    }

    /// Read a game.
    ///
    /// Returns `Ok(None)` if no game with this name exists.
    pub fn read(&self, name: &GameName) -> Result<Option<GameRecordV1>, StoreError> {
        let path = self.paths.game_path(name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };

        parse_game(&contents)
            .map(Some)
            .map_err(|source| StoreError::Invalid { path, source })
    }

    /// Whether a game with this name exists.
    pub fn exists(&self, name: &GameName) -> bool {
        self.paths.game_path(name).is_file()
    }

    /// Write a game atomically, creating the games directory if needed.
    ///
    /// The file name comes from the record's own name.
    pub fn write(&self, record: &GameRecordV1) -> Result<(), StoreError> {
        record.validate()?;
        let name = record.game_name().map_err(SchemaError::from)?;

        let dir = self.paths.games_dir();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let contents = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;

        let path = self.paths.game_path(&name);
        let temp_path = path.with_extension("json.tmp");

        let result = write_synced(&temp_path, contents.as_bytes())
            .map_err(|e| StoreError::Io {
                path: temp_path.clone(),
                source: e,
            })
            .and_then(|()| {
                fs::rename(&temp_path, &path).map_err(|e| StoreError::Io {
                    path: path.clone(),
                    source: e,
                })
            });

        if result.is_err() {
            fs::remove_file(&temp_path).ok();
        }
        result
    }

    /// Delete a game.
    ///
    /// Returns `Ok(false)` if no game with this name exists.
    pub fn delete(&self, name: &GameName) -> Result<bool, StoreError> {
        let path = self.paths.game_path(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    /// Names of all saved games, sorted.
    ///
    /// Files whose stem is not a valid game name are skipped. A missing
    /// games directory means no games.
    pub fn list(&self) -> Result<Vec<GameName>, StoreError> {
        let dir = self.paths.games_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io { path: dir, source: e }),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(name) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| GameName::new(stem).ok())
            {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

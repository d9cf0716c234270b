//! engine::game
//!
//! A named, persisted [`Session`].
//!
//! `Game` binds a session to its identity and timestamps and converts to and
//! from the saved record. Loading rebuilds the session exactly: cube,
//! counter, and the whole undo stack, so undo keeps working across
//! invocations.

use thiserror::Error;
use uuid::Uuid;

use super::history::History;
use super::session::Session;
use crate::core::cube::InvalidStateError;
use crate::core::types::{GameName, UtcTimestamp};
use crate::store::schema::{
    FaceStrings, GameRecordV1, SchemaError, Timestamps, GAME_KIND, SCHEMA_VERSION,
};
use crate::store::{GameStore, StoreError};

/// Errors from opening or saving games.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("game '{0}' not found")]
    NotFound(GameName),

    #[error("game '{0}' already exists; use --force to overwrite")]
    AlreadyExists(GameName),

    #[error("invalid saved state: {0}")]
    InvalidState(#[from] InvalidStateError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A saved game and its live session.
#[derive(Debug, Clone)]
pub struct Game {
    id: Uuid,
    name: GameName,
    created_at: UtcTimestamp,
    pub session: Session,
}

impl Game {
    /// A new solved game. Not saved until [`Game::save`].
    pub fn new(name: GameName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: UtcTimestamp::now(),
            session: Session::new(),
        }
    }

    /// Create and save a new game.
    ///
    /// Fails with `AlreadyExists` unless `force` is set.
    pub fn create(store: &GameStore, name: GameName, force: bool) -> Result<Self, GameError> {
        if !force && store.exists(&name) {
            return Err(GameError::AlreadyExists(name));
        }
        let game = Self::new(name);
        game.save(store)?;
        Ok(game)
    }

    /// Load an existing game.
    pub fn open(store: &GameStore, name: &GameName) -> Result<Self, GameError> {
        let record = store
            .read(name)?
            .ok_or_else(|| GameError::NotFound(name.clone()))?;
        Self::from_record(record)
    }

    /// Delete a saved game.
    pub fn delete(store: &GameStore, name: &GameName) -> Result<(), GameError> {
        if store.delete(name)? {
            Ok(())
        } else {
            Err(GameError::NotFound(name.clone()))
        }
    }

    /// Rebuild a game from a saved record.
    pub fn from_record(record: GameRecordV1) -> Result<Self, GameError> {
        let name = record.game_name().map_err(SchemaError::from)?;
        let cube = record.cube()?;
        let history = History::from_entries(record.history);

        Ok(Self {
            id: record.id,
            name,
            created_at: record.timestamps.created_at,
            session: Session::from_parts(cube, history, record.move_count),
        })
    }

    /// Snapshot the game as a record stamped with the current time.
    pub fn to_record(&self) -> GameRecordV1 {
        GameRecordV1 {
            kind: GAME_KIND.to_string(),
            schema_version: SCHEMA_VERSION,
            id: self.id,
            name: self.name.to_string(),
            faces: FaceStrings::from_cube(self.session.state()),
            move_count: self.session.move_count(),
            history: self.session.history().entries().to_vec(),
            timestamps: Timestamps {
                created_at: self.created_at.clone(),
                updated_at: UtcTimestamp::now(),
            },
        }
    }

    /// Write the game to `store`.
    pub fn save(&self, store: &GameStore) -> Result<(), GameError> {
        store.write(&self.to_record())?;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &GameName {
        &self.name
    }

    pub fn created_at(&self) -> &UtcTimestamp {
        &self.created_at
    }
}

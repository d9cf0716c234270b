//! store::schema
//!
//! Saved game schema (v1).
//!
//! # Schema Design
//!
//! A saved game is:
//! - Self-describing with `kind` and `schema_version`
//! - Strictly parsed (unknown fields rejected)
//! - Checked on load: every face string must decode and the whole cube must
//!   pass the color-count and center checks
//!
//! # Example
//!
//! ```
//! use cubework::core::types::GameName;
//! use cubework::store::schema::{parse_game, GameRecordV1, GAME_KIND};
//!
//! let record = GameRecordV1::new(&GameName::new("practice").unwrap());
//! assert_eq!(record.kind, GAME_KIND);
//!
//! let json = serde_json::to_string(&record).unwrap();
//! let parsed = parse_game(&json).unwrap();
//! assert_eq!(parsed.name, "practice");
//! assert!(parsed.cube().unwrap().is_solved());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::core::cube::{CubeState, InvalidStateError};
use crate::core::journal::HistoryEntry;
use crate::core::types::{Face, GameName, TypeError, UtcTimestamp};

/// The kind identifier for saved games.
pub const GAME_KIND: &str = "cubework.game";

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from parsing or validating a saved game.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse game: {0}")]
    ParseError(String),

    #[error("invalid kind '{found}', expected '{}'", GAME_KIND)]
    InvalidKind { found: String },

    #[error("unsupported schema version {0}, supported: {SCHEMA_VERSION}")]
    UnsupportedVersion(u32),

    #[error("invalid cube state: {0}")]
    InvalidState(#[from] InvalidStateError),

    #[error("type validation failed: {0}")]
    TypeError(#[from] TypeError),
}

/// Envelope for version dispatch before full parsing.
#[derive(Debug, Deserialize)]
struct GameEnvelope {
    kind: String,
    schema_version: u32,
}

/// Parse saved game JSON with version dispatch.
///
/// # Errors
///
/// Returns an error if:
/// - The JSON is malformed or has unknown fields
/// - The `kind` field doesn't match `GAME_KIND`
/// - The `schema_version` is not supported
/// - The name or any face string is invalid
pub fn parse_game(json: &str) -> Result<GameRecordV1, SchemaError> {
    let envelope: GameEnvelope =
        serde_json::from_str(json).map_err(|e| SchemaError::ParseError(e.to_string()))?;

    if envelope.kind != GAME_KIND {
        return Err(SchemaError::InvalidKind {
            found: envelope.kind,
        });
    }

    match envelope.schema_version {
        1 => {
            let record: GameRecordV1 =
                serde_json::from_str(json).map_err(|e| SchemaError::ParseError(e.to_string()))?;
            record.validate()?;
            Ok(record)
        }
        v => Err(SchemaError::UnsupportedVersion(v)),
    }
}

/// A saved game (v1).
///
/// Use [`parse_game`] to parse from JSON with validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GameRecordV1 {
    /// Kind identifier (always "cubework.game")
    pub kind: String,

    /// Schema version (always 1 for this struct)
    pub schema_version: u32,

    /// Stable identity, kept across saves
    pub id: Uuid,

    /// Game name, also the file stem
    pub name: String,

    /// The cube, one encoded string per face
    pub faces: FaceStrings,

    /// Visible move counter
    pub move_count: u32,

    /// Undo stack, oldest first
    pub history: Vec<HistoryEntry>,

    /// Timestamps
    pub timestamps: Timestamps,
}

impl GameRecordV1 {
    /// A fresh solved game.
    pub fn new(name: &GameName) -> Self {
        let now = UtcTimestamp::now();
        Self {
            kind: GAME_KIND.to_string(),
            schema_version: SCHEMA_VERSION,
            id: Uuid::new_v4(),
            name: name.to_string(),
            faces: FaceStrings::from_cube(&CubeState::solved()),
            move_count: 0,
            history: Vec::new(),
            timestamps: Timestamps {
                created_at: now.clone(),
                updated_at: now,
            },
        }
    }

    /// Validate the record.
    ///
    /// This checks that:
    /// - `kind` matches `GAME_KIND`
    /// - `schema_version` equals `SCHEMA_VERSION`
    /// - The name is a valid game name
    /// - The faces decode to a valid cube
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.kind != GAME_KIND {
            return Err(SchemaError::InvalidKind {
                found: self.kind.clone(),
            });
        }

        if self.schema_version != SCHEMA_VERSION {
            return Err(SchemaError::UnsupportedVersion(self.schema_version));
        }

        self.game_name()?;
        self.cube()?;

        Ok(())
    }

    /// The validated game name.
    pub fn game_name(&self) -> Result<GameName, TypeError> {
        GameName::new(self.name.as_str())
    }

    /// Decode the stored faces into a validated cube.
    pub fn cube(&self) -> Result<CubeState, InvalidStateError> {
        self.faces.to_cube()
    }

    /// Update the `updated_at` timestamp to now.
    pub fn touch(&mut self) {
        self.timestamps.updated_at = UtcTimestamp::now();
    }
}

/// The six faces as encoded strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FaceStrings {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub front: String,
    pub back: String,
}

impl FaceStrings {
    /// Encode every face of `cube`.
    pub fn from_cube(cube: &CubeState) -> Self {
        Self {
            top: cube.serialize_face(Face::Top),
            bottom: cube.serialize_face(Face::Bottom),
            left: cube.serialize_face(Face::Left),
            right: cube.serialize_face(Face::Right),
            front: cube.serialize_face(Face::Front),
            back: cube.serialize_face(Face::Back),
        }
    }

    /// The encoded string for one face.
    pub fn get(&self, face: Face) -> &str {
        match face {
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    /// Decode and validate the whole cube.
    pub fn to_cube(&self) -> Result<CubeState, InvalidStateError> {
        CubeState::from_face_strings(Face::ALL.map(|face| (face, self.get(face))))
    }
}

/// Creation and update times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Timestamps {
    pub created_at: UtcTimestamp,
    pub updated_at: UtcTimestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moves::Move;
    use crate::core::types::Color;

    fn sample() -> GameRecordV1 {
        GameRecordV1::new(&GameName::new("sample").unwrap())
    }

    mod parse {
        use super::*;

        #[test]
        fn valid_document() {
            let json = r#"{
                "kind": "cubework.game",
                "schema_version": 1,
                "id": "7c1b2a30-5a8e-4a8e-9a55-0d2f4d6f1e11",
                "name": "sunday",
                "faces": {
                    "top": "YYYYYYYYY", "bottom": "WWWWWWWWW",
                    "left": "GGGGGGGGG", "right": "BBBBBBBBB",
                    "front": "OOOOOOOOO", "back": "RRRRRRRRR"
                },
                "move_count": 1,
                "history": [ { "inverse": "R'", "counted": true } ],
                "timestamps": {
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                }
            }"#;

            let record = parse_game(json).unwrap();
            assert_eq!(record.name, "sunday");
            assert_eq!(record.move_count, 1);
            assert_eq!(record.history[0].inverse, Move::R_PRIME);
            assert!(record.cube().unwrap().is_solved());
        }

        #[test]
        fn invalid_kind() {
            let json = r#"{ "kind": "wrong-kind", "schema_version": 1 }"#;
            assert!(matches!(
                parse_game(json),
                Err(SchemaError::InvalidKind { .. })
            ));
        }

        #[test]
        fn unsupported_version() {
            let json = r#"{ "kind": "cubework.game", "schema_version": 2 }"#;
            assert!(matches!(
                parse_game(json),
                Err(SchemaError::UnsupportedVersion(2))
            ));
        }

        #[test]
        fn malformed_json() {
            assert!(matches!(
                parse_game("not json"),
                Err(SchemaError::ParseError(_))
            ));
        }

        #[test]
        fn unknown_field_rejected() {
            let mut value = serde_json::to_value(sample()).unwrap();
            value["extra"] = serde_json::json!(true);
            let json = serde_json::to_string(&value).unwrap();
            assert!(matches!(parse_game(&json), Err(SchemaError::ParseError(_))));
        }

        #[test]
        fn corrupt_face_rejected() {
            let mut record = sample();
            record.faces.front = "OOOOXOOOO".to_string();
            let json = serde_json::to_string(&record).unwrap();
            assert!(matches!(
                parse_game(&json),
                Err(SchemaError::InvalidState(InvalidStateError::UnknownColor { .. }))
            ));
        }

        #[test]
        fn impossible_cube_rejected() {
            let mut record = sample();
            record.faces.front = "OOOOOOOOY".to_string();
            let json = serde_json::to_string(&record).unwrap();
            assert!(matches!(
                parse_game(&json),
                Err(SchemaError::InvalidState(InvalidStateError::ColorCount { .. }))
            ));
        }

        #[test]
        fn invalid_name_rejected() {
            let mut record = sample();
            record.name = "../escape".to_string();
            let json = serde_json::to_string(&record).unwrap();
            assert!(matches!(parse_game(&json), Err(SchemaError::TypeError(_))));
        }
    }

    mod record {
        use super::*;

        #[test]
        fn new_is_solved() {
            let record = sample();
            assert_eq!(record.schema_version, SCHEMA_VERSION);
            assert_eq!(record.move_count, 0);
            assert!(record.history.is_empty());
            assert!(record.validate().is_ok());
            assert_eq!(record.faces.get(Face::Top), "YYYYYYYYY");
        }

        #[test]
        fn faces_follow_cube() {
            let cube = Move::U.applied_to(&CubeState::solved());
            let faces = FaceStrings::from_cube(&cube);
            assert_eq!(&faces.front[..3], "GGG");
            assert_eq!(faces.to_cube().unwrap(), cube);
            assert_eq!(cube.sticker(Face::Front, 0, 0), Color::Green);
        }

        #[test]
        fn touch_moves_updated_at() {
            let mut record = sample();
            let created = record.timestamps.created_at.clone();
            record.touch();
            assert_eq!(record.timestamps.created_at, created);
            assert!(record.timestamps.updated_at.as_datetime() >= created.as_datetime());
        }
    }
}

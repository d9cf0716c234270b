//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Face`] - One of the six 3×3 sticker grids
//! - [`Color`] - Sticker color, one per solved face
//! - [`Direction`] - Arrow direction of a gesture
//! - [`Line`] - Validated row or column index (0, 1 or 2)
//! - [`ScrambleCounting`] - Move-counter policy for scrambles
//! - [`GameName`] - Validated name of a saved game
//! - [`UtcTimestamp`] - RFC3339 timestamp
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use cubework::core::types::{Color, Face, GameName, Line};
//!
//! assert_eq!(Face::Front.home_color(), Color::Orange);
//! assert_eq!(Color::from_code('y'), Some(Color::Yellow));
//!
//! assert!(Line::new(2).is_ok());
//! assert!(Line::new(3).is_err());
//!
//! assert!(GameName::new("sunday-solve").is_ok());
//! assert!(GameName::new("has space").is_err());
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("line index {0} out of range, expected 0, 1 or 2")]
    LineOutOfRange(usize),

    #[error("unknown color code '{0}'")]
    UnknownColorCode(char),

    #[error("invalid game name: {0}")]
    InvalidGameName(String),
}

/// A face of the cube.
///
/// The discriminant doubles as the storage index inside
/// [`CubeState`](crate::core::cube::CubeState).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
    Front = 4,
    Back = 5,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Storage index of this face.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The color this face carries when the cube is solved.
    pub fn home_color(self) -> Color {
        match self {
            Face::Top => Color::Yellow,
            Face::Bottom => Color::White,
            Face::Left => Color::Green,
            Face::Right => Color::Blue,
            Face::Front => Color::Orange,
            Face::Back => Color::Red,
        }
    }
}

/// A sticker color.
///
/// Colors are pure data. Each has a single-letter code used by the
/// persisted face strings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Yellow = 0,
    White = 1,
    Green = 2,
    Blue = 3,
    Orange = 4,
    Red = 5,
}

impl Color {
    /// All colors in index order.
    pub const ALL: [Color; 6] = [
        Color::Yellow,
        Color::White,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Index used for per-color tallies.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single uppercase letter identifying this color.
    pub fn code(self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }

    /// Decode a color letter (case-insensitive).
    pub fn from_code(code: char) -> Option<Color> {
        match code.to_ascii_uppercase() {
            'Y' => Some(Color::Yellow),
            'W' => Some(Color::White),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'O' => Some(Color::Orange),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
}

impl TryFrom<char> for Color {
    type Error = TypeError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Color::from_code(code).ok_or(TypeError::UnknownColorCode(code))
    }
}

/// Arrow direction of a gesture on the net.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Up and Down turn columns; Left and Right turn rows.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A validated row or column index.
///
/// # Example
///
/// ```
/// use cubework::core::types::Line;
///
/// let line = Line::new(1).unwrap();
/// assert_eq!(line.get(), 1);
/// assert!(Line::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Line(u8);

impl Line {
    pub const FIRST: Line = Line(0);
    pub const MIDDLE: Line = Line(1);
    pub const LAST: Line = Line(2);

    /// All three lines in order.
    pub const ALL: [Line; 3] = [Line::FIRST, Line::MIDDLE, Line::LAST];

    /// Create a validated line index.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::LineOutOfRange` for anything outside `0..=2`.
    pub fn new(index: usize) -> Result<Self, TypeError> {
        if index < 3 {
            Ok(Self(index as u8))
        } else {
            Err(TypeError::LineOutOfRange(index))
        }
    }

    /// The index as `usize`.
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for Line {
    type Error = TypeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Line> for usize {
    fn from(line: Line) -> Self {
        line.get()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How scramble turns affect the visible move counter.
///
/// Scrambling always records every turn in the undo history; this policy
/// only decides what the player's counter shows afterwards.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScrambleCounting {
    /// Every scramble turn adds one to the counter.
    Increment,
    /// The counter is left untouched.
    #[default]
    Preserve,
    /// The counter is set to zero once scrambling finishes.
    Reset,
}

/// A validated saved-game name.
///
/// Game names become file names in the store, so they are restricted to:
/// - 1 to 64 characters
/// - ASCII letters, digits, `-` and `_`
/// - not starting with `-`
///
/// # Example
///
/// ```
/// use cubework::core::types::GameName;
///
/// let name = GameName::new("speed_run-2").unwrap();
/// assert_eq!(name.as_str(), "speed_run-2");
///
/// assert!(GameName::new("").is_err());
/// assert!(GameName::new("-flag").is_err());
/// assert!(GameName::new("../escape").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameName(String);

impl GameName {
    /// Maximum accepted length.
    pub const MAX_LEN: usize = 64;

    /// Create a new validated game name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidGameName` if the name breaks the rules above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidGameName(
                "game name cannot be empty".into(),
            ));
        }

        if name.len() > Self::MAX_LEN {
            return Err(TypeError::InvalidGameName(format!(
                "game name cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }

        if name.starts_with('-') {
            return Err(TypeError::InvalidGameName(
                "game name cannot start with '-'".into(),
            ));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(TypeError::InvalidGameName(format!(
                "game name cannot contain '{}'",
                c.escape_default()
            )));
        }

        Ok(())
    }

    /// Get the game name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GameName {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl TryFrom<String> for GameName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GameName> for String {
    fn from(name: GameName) -> Self {
        name.0
    }
}

impl std::str::FromStr for GameName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for GameName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A UTC timestamp, serialized as RFC3339.
///
/// # Example
///
/// ```
/// use cubework::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Saved at: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

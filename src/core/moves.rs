//! core::moves
//!
//! The 18 canonical quarter turns and the engine that applies them.
//!
//! # Model
//!
//! Every turn is one 4-cycle of sticker lines (a row or column on each of
//! four faces). Outer-layer turns additionally spin their own face by 90°;
//! slice turns (M, E, S) spin nothing.
//!
//! The cycle of every [`Layer`] is a fixed table of four [`Slot`]s. A slot
//! may be `reversed`, meaning its line is read back to front so that all
//! four lines share one winding order. Applying a turn reads all four lines
//! in that shared order and writes each one into the next slot (clockwise)
//! or the previous slot (prime). Because the lines only rotate around the
//! cycle, every turn is a permutation with order 4, and a prime turn is its
//! exact inverse.
//!
//! # Example
//!
//! ```
//! use cubework::core::cube::CubeState;
//! use cubework::core::moves::Move;
//!
//! let mut cube = CubeState::solved();
//! let r: Move = "R".parse().unwrap();
//! for _ in 0..4 {
//!     r.apply(&mut cube);
//! }
//! assert!(cube.is_solved());
//!
//! r.apply(&mut cube);
//! r.inverse().apply(&mut cube);
//! assert!(cube.is_solved());
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};
use thiserror::Error;

use crate::core::cube::CubeState;
use crate::core::types::{Color, Face};

/// Errors from parsing move notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move")]
    Empty,

    #[error("unknown layer '{0}', expected one of U D L R F B M E S")]
    UnknownLayer(String),

    #[error("unsupported modifier in '{0}', only quarter turns are allowed")]
    UnsupportedModifier(String),
}

/// A turnable layer: six outer faces and three middle slices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount,
)]
pub enum Layer {
    U,
    D,
    L,
    R,
    F,
    B,
    /// Middle slice between L and R.
    M,
    /// Equatorial slice between U and D.
    E,
    /// Standing slice between F and B.
    S,
}

impl Layer {
    /// All layers in notation order.
    pub const ALL: [Layer; 9] = [
        Layer::U,
        Layer::D,
        Layer::L,
        Layer::R,
        Layer::F,
        Layer::B,
        Layer::M,
        Layer::E,
        Layer::S,
    ];

    /// The face spun in place by this layer, if any.
    pub fn spun_face(self) -> Option<Face> {
        match self {
            Layer::U => Some(Face::Top),
            Layer::D => Some(Face::Bottom),
            Layer::L => Some(Face::Left),
            Layer::R => Some(Face::Right),
            Layer::F => Some(Face::Front),
            Layer::B => Some(Face::Back),
            Layer::M | Layer::E | Layer::S => None,
        }
    }

    /// True for M, E and S.
    pub fn is_slice(self) -> bool {
        self.spun_face().is_none()
    }

    /// The four slots this layer cycles, in clockwise order.
    ///
    /// Stickers travel from `cycle()[i]` to `cycle()[(i + 1) % 4]`.
    pub fn cycle(self) -> [Slot; 4] {
        use Face::*;
        match self {
            Layer::U => [
                Slot::row(Front, 0),
                Slot::row(Right, 0),
                Slot::row(Back, 0),
                Slot::row(Left, 0),
            ],
            Layer::D => [
                Slot::row(Front, 2),
                Slot::row(Left, 2),
                Slot::row(Back, 2),
                Slot::row(Right, 2),
            ],
            Layer::L => [
                Slot::column(Top, 0),
                Slot::column(Front, 0),
                Slot::column(Bottom, 0),
                Slot::column(Back, 2).reversed(),
            ],
            Layer::R => [
                Slot::column(Top, 2),
                Slot::column(Back, 0).reversed(),
                Slot::column(Bottom, 2),
                Slot::column(Front, 2),
            ],
            Layer::F => [
                Slot::row(Top, 2),
                Slot::column(Right, 0),
                Slot::row(Bottom, 0).reversed(),
                Slot::column(Left, 2).reversed(),
            ],
            Layer::B => [
                Slot::row(Top, 0).reversed(),
                Slot::column(Right, 2),
                Slot::row(Bottom, 2).reversed(),
                Slot::column(Left, 0),
            ],
            Layer::M => [
                Slot::column(Top, 1),
                Slot::column(Front, 1),
                Slot::column(Bottom, 1),
                Slot::column(Back, 1).reversed(),
            ],
            Layer::E => [
                Slot::row(Front, 1),
                Slot::row(Right, 1),
                Slot::row(Back, 1),
                Slot::row(Left, 1),
            ],
            Layer::S => [
                Slot::row(Top, 1),
                Slot::column(Right, 1),
                Slot::row(Bottom, 1).reversed(),
                Slot::column(Left, 1).reversed(),
            ],
        }
    }

    fn from_letter(letter: char) -> Option<Layer> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.letter() == letter.to_ascii_uppercase())
    }

    /// Notation letter.
    pub fn letter(self) -> char {
        match self {
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::L => 'L',
            Layer::R => 'R',
            Layer::F => 'F',
            Layer::B => 'B',
            Layer::M => 'M',
            Layer::E => 'E',
            Layer::S => 'S',
        }
    }
}

/// Whether a slot holds a row or a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
}

/// One line of three stickers taking part in a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub face: Face,
    pub kind: LineKind,
    pub index: usize,
    /// Read and written back to front.
    pub reversed: bool,
}

impl Slot {
    const fn row(face: Face, index: usize) -> Self {
        Self {
            face,
            kind: LineKind::Row,
            index,
            reversed: false,
        }
    }

    const fn column(face: Face, index: usize) -> Self {
        Self {
            face,
            kind: LineKind::Column,
            index,
            reversed: false,
        }
    }

    const fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    fn read(&self, cube: &CubeState) -> [Color; 3] {
        let mut line = match self.kind {
            LineKind::Row => cube.row(self.face, self.index),
            LineKind::Column => cube.column(self.face, self.index),
        };
        if self.reversed {
            line.reverse();
        }
        line
    }

    fn write(&self, cube: &mut CubeState, mut line: [Color; 3]) {
        if self.reversed {
            line.reverse();
        }
        match self.kind {
            LineKind::Row => cube.set_row(self.face, self.index, line),
            LineKind::Column => cube.set_column(self.face, self.index, line),
        }
    }
}

/// One of the 18 canonical quarter turns.
///
/// Displayed and parsed in standard notation: `R` is a clockwise turn of
/// the right layer and `R'` its counter-clockwise (prime) inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    layer: Layer,
    prime: bool,
}

impl Move {
    pub const U: Move = Move::clockwise(Layer::U);
    pub const U_PRIME: Move = Move::counter_clockwise(Layer::U);
    pub const D: Move = Move::clockwise(Layer::D);
    pub const D_PRIME: Move = Move::counter_clockwise(Layer::D);
    pub const L: Move = Move::clockwise(Layer::L);
    pub const L_PRIME: Move = Move::counter_clockwise(Layer::L);
    pub const R: Move = Move::clockwise(Layer::R);
    pub const R_PRIME: Move = Move::counter_clockwise(Layer::R);
    pub const F: Move = Move::clockwise(Layer::F);
    pub const F_PRIME: Move = Move::counter_clockwise(Layer::F);
    pub const B: Move = Move::clockwise(Layer::B);
    pub const B_PRIME: Move = Move::counter_clockwise(Layer::B);
    pub const M: Move = Move::clockwise(Layer::M);
    pub const M_PRIME: Move = Move::counter_clockwise(Layer::M);
    pub const E: Move = Move::clockwise(Layer::E);
    pub const E_PRIME: Move = Move::counter_clockwise(Layer::E);
    pub const S: Move = Move::clockwise(Layer::S);
    pub const S_PRIME: Move = Move::counter_clockwise(Layer::S);

    /// All 18 moves, each clockwise turn followed by its prime.
    pub const ALL: [Move; 18] = [
        Move::U,
        Move::U_PRIME,
        Move::D,
        Move::D_PRIME,
        Move::L,
        Move::L_PRIME,
        Move::R,
        Move::R_PRIME,
        Move::F,
        Move::F_PRIME,
        Move::B,
        Move::B_PRIME,
        Move::M,
        Move::M_PRIME,
        Move::E,
        Move::E_PRIME,
        Move::S,
        Move::S_PRIME,
    ];

    /// Clockwise quarter turn of `layer`.
    pub const fn clockwise(layer: Layer) -> Self {
        Self {
            layer,
            prime: false,
        }
    }

    /// Counter-clockwise quarter turn of `layer`.
    pub const fn counter_clockwise(layer: Layer) -> Self {
        Self { layer, prime: true }
    }

    /// Build a move from a layer and a prime flag.
    pub const fn new(layer: Layer, prime: bool) -> Self {
        Self { layer, prime }
    }

    pub fn layer(self) -> Layer {
        self.layer
    }

    pub fn is_prime(self) -> bool {
        self.prime
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            layer: self.layer,
            prime: !self.prime,
        }
    }

    /// Apply this turn to `cube` in place.
    ///
    /// Turns are total: any cube and any move produce a new valid state.
    pub fn apply(self, cube: &mut CubeState) {
        let slots = self.layer.cycle();
        let lines = slots.map(|slot| slot.read(cube));

        for (i, slot) in slots.iter().enumerate() {
            // Clockwise: slot i receives from slot i-1. Prime: from slot i+1.
            let source = if self.prime { (i + 1) % 4 } else { (i + 3) % 4 };
            slot.write(cube, lines[source]);
        }

        if let Some(face) = self.layer.spun_face() {
            if self.prime {
                cube.spin_counter_clockwise(face);
            } else {
                cube.spin_clockwise(face);
            }
        }
    }

    /// Apply this turn to a copy of `cube`.
    pub fn applied_to(self, cube: &CubeState) -> CubeState {
        let mut next = cube.clone();
        self.apply(&mut next);
        next
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.prime {
            write!(f, "{}'", self.layer.letter())
        } else {
            write!(f, "{}", self.layer.letter())
        }
    }
}

impl std::str::FromStr for Move {
    type Err = NotationError;

    /// Parse `X`, `X'`, `X’` or `Xi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next().ok_or(NotationError::Empty)?;
        let layer =
            Layer::from_letter(first).ok_or_else(|| NotationError::UnknownLayer(s.to_string()))?;

        match chars.as_str() {
            "" => Ok(Move::clockwise(layer)),
            "'" | "’" | "i" => Ok(Move::counter_clockwise(layer)),
            _ => Err(NotationError::UnsupportedModifier(s.to_string())),
        }
    }
}

impl TryFrom<String> for Move {
    type Error = NotationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

/// Parse a whitespace-separated sequence such as `"R U R' U'"`.
///
/// # Errors
///
/// Returns the first [`NotationError`] encountered.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, NotationError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Apply a sequence of moves in order.
pub fn apply_all(moves: &[Move], cube: &mut CubeState) {
    for mv in moves {
        mv.apply(cube);
    }
}

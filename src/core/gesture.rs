//! core::gesture
//!
//! Resolution of 2D picks on the cube net into canonical moves.
//!
//! A player never names a layer directly. They pick a sticker on one of the
//! six faces of the net and push an arrow. Up and Down turn the layer that
//! contains the picked column; Left and Right turn the layer that contains
//! the picked row. Which layer that is, and which way counts as clockwise,
//! depends on where the face sits in the net:
//!
//! ```text
//!          +-----+
//!          | Top |
//!    +-----+-----+-----+-----+
//!    |Left |Front|Right|Back |
//!    +-----+-----+-----+-----+
//!          |Bottom|
//!          +-----+
//! ```
//!
//! Bottom is mirrored vertically and Back horizontally relative to their
//! neighbours, so those faces swap clockwise and prime on the mirrored axis.
//! Bottom's rows are mirrored against Top's as well.
//!
//! # Example
//!
//! ```
//! use cubework::core::gesture::GestureInput;
//! use cubework::core::moves::Move;
//! use cubework::core::types::{Direction, Face};
//!
//! let gesture = GestureInput::new(Face::Front, 0, 2, Direction::Up).unwrap();
//! assert_eq!(gesture.resolve(), Move::R);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::moves::{Layer, Move};
use crate::core::types::{Direction, Face, Line, TypeError};

/// A pick-and-push on the net: which sticker, and which arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GestureInput {
    pub face: Face,
    pub row: Line,
    pub col: Line,
    pub direction: Direction,
}

impl GestureInput {
    /// Build a gesture from raw indices.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::LineOutOfRange` if `row` or `col` is outside `0..=2`.
    pub fn new(
        face: Face,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Self, TypeError> {
        Ok(Self {
            face,
            row: Line::new(row)?,
            col: Line::new(col)?,
            direction,
        })
    }

    /// The canonical move this gesture turns.
    pub fn resolve(&self) -> Move {
        resolve(self.face, self.row, self.col, self.direction)
    }
}

/// Map a pick to exactly one of the 18 canonical moves.
///
/// Total over every face, row, column and direction. The center sticker
/// resolves to a slice move like any other middle line.
pub fn resolve(face: Face, row: Line, col: Line, direction: Direction) -> Move {
    match direction {
        Direction::Up | Direction::Down => {
            let layer = vertical_layers(face)[col.get()];
            let up_is_clockwise = face != Face::Bottom;
            let clockwise = (direction == Direction::Up) == up_is_clockwise;
            Move::new(layer, !clockwise)
        }
        Direction::Left | Direction::Right => {
            let layer = horizontal_layers(face)[row.get()];
            let right_is_clockwise = !matches!(face, Face::Back | Face::Bottom);
            let clockwise = (direction == Direction::Right) == right_is_clockwise;
            Move::new(layer, !clockwise)
        }
    }
}

/// Layers turned by Up/Down, indexed by picked column.
fn vertical_layers(face: Face) -> [Layer; 3] {
    match face {
        Face::Front | Face::Top | Face::Bottom => [Layer::L, Layer::M, Layer::R],
        Face::Left => [Layer::B, Layer::M, Layer::F],
        Face::Right => [Layer::F, Layer::M, Layer::B],
        Face::Back => [Layer::R, Layer::M, Layer::L],
    }
}

/// Layers turned by Left/Right, indexed by picked row.
fn horizontal_layers(face: Face) -> [Layer; 3] {
    match face {
        Face::Front | Face::Left | Face::Right | Face::Back => [Layer::U, Layer::E, Layer::D],
        Face::Top => [Layer::B, Layer::S, Layer::F],
        Face::Bottom => [Layer::F, Layer::S, Layer::B],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pick(face: Face, row: usize, col: usize, direction: Direction) -> Move {
        GestureInput::new(face, row, col, direction)
            .unwrap()
            .resolve()
    }

    #[test]
    fn resolver_is_total() {
        let mut produced = HashSet::new();
        for face in Face::ALL {
            for row in Line::ALL {
                for col in Line::ALL {
                    for direction in Direction::ALL {
                        let mv = resolve(face, row, col, direction);
                        assert!(Move::ALL.contains(&mv));
                        produced.insert(mv);
                    }
                }
            }
        }
        // Every canonical move is reachable from some gesture.
        assert_eq!(produced.len(), 18);
    }

    #[test]
    fn up_and_down_are_inverses() {
        for face in Face::ALL {
            for row in Line::ALL {
                for col in Line::ALL {
                    let up = resolve(face, row, col, Direction::Up);
                    let down = resolve(face, row, col, Direction::Down);
                    assert_eq!(up.inverse(), down);
                    let left = resolve(face, row, col, Direction::Left);
                    let right = resolve(face, row, col, Direction::Right);
                    assert_eq!(left.inverse(), right);
                }
            }
        }
    }

    #[test]
    fn vertical_front_columns() {
        assert_eq!(pick(Face::Front, 0, 0, Direction::Up), Move::L);
        assert_eq!(pick(Face::Front, 2, 1, Direction::Up), Move::M);
        assert_eq!(pick(Face::Front, 1, 2, Direction::Down), Move::R_PRIME);
    }

    #[test]
    fn vertical_side_faces() {
        assert_eq!(pick(Face::Left, 0, 0, Direction::Up), Move::B);
        assert_eq!(pick(Face::Left, 0, 2, Direction::Down), Move::F_PRIME);
        assert_eq!(pick(Face::Right, 0, 0, Direction::Up), Move::F);
        assert_eq!(pick(Face::Right, 0, 2, Direction::Up), Move::B);
        assert_eq!(pick(Face::Back, 0, 0, Direction::Up), Move::R);
        assert_eq!(pick(Face::Back, 0, 2, Direction::Down), Move::L_PRIME);
        assert_eq!(pick(Face::Top, 2, 2, Direction::Up), Move::R);
    }

    #[test]
    fn vertical_bottom_is_mirrored() {
        assert_eq!(pick(Face::Bottom, 0, 0, Direction::Up), Move::L_PRIME);
        assert_eq!(pick(Face::Bottom, 0, 0, Direction::Down), Move::L);
        assert_eq!(pick(Face::Bottom, 1, 1, Direction::Up), Move::M_PRIME);
        assert_eq!(pick(Face::Bottom, 2, 2, Direction::Down), Move::R);
    }

    #[test]
    fn horizontal_belt_faces() {
        for face in [Face::Front, Face::Left, Face::Right] {
            assert_eq!(pick(face, 0, 1, Direction::Right), Move::U);
            assert_eq!(pick(face, 0, 1, Direction::Left), Move::U_PRIME);
            assert_eq!(pick(face, 1, 0, Direction::Right), Move::E);
            assert_eq!(pick(face, 2, 2, Direction::Left), Move::D_PRIME);
        }
    }

    #[test]
    fn horizontal_back_is_mirrored() {
        assert_eq!(pick(Face::Back, 0, 0, Direction::Left), Move::U);
        assert_eq!(pick(Face::Back, 0, 0, Direction::Right), Move::U_PRIME);
        assert_eq!(pick(Face::Back, 1, 1, Direction::Left), Move::E);
        assert_eq!(pick(Face::Back, 2, 0, Direction::Right), Move::D_PRIME);
    }

    #[test]
    fn horizontal_top_and_bottom() {
        assert_eq!(pick(Face::Top, 0, 0, Direction::Right), Move::B);
        assert_eq!(pick(Face::Top, 1, 0, Direction::Left), Move::S_PRIME);
        assert_eq!(pick(Face::Top, 2, 0, Direction::Right), Move::F);
        assert_eq!(pick(Face::Bottom, 0, 0, Direction::Left), Move::F);
        assert_eq!(pick(Face::Bottom, 1, 0, Direction::Right), Move::S_PRIME);
        assert_eq!(pick(Face::Bottom, 2, 0, Direction::Left), Move::B);
    }

    #[test]
    fn center_resolves_to_slices() {
        assert_eq!(pick(Face::Front, 1, 1, Direction::Up), Move::M);
        assert_eq!(pick(Face::Front, 1, 1, Direction::Right), Move::E);
        assert_eq!(pick(Face::Top, 1, 1, Direction::Right), Move::S);
        assert_eq!(pick(Face::Left, 1, 1, Direction::Down), Move::M_PRIME);
    }

    #[test]
    fn out_of_range_pick_rejected() {
        assert_eq!(
            GestureInput::new(Face::Top, 3, 0, Direction::Up),
            Err(TypeError::LineOutOfRange(3))
        );
        assert!(GestureInput::new(Face::Top, 0, 9, Direction::Up).is_err());
    }
}

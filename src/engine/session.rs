//! engine::session
//!
//! A live game: cube, undo history, move counter, and current selection.
//!
//! Every state change goes through here so the history invariant holds:
//! applying the stored inverses newest first always walks the cube back to
//! the state it had before those turns.
//!
//! # Example
//!
//! ```
//! use cubework::core::gesture::GestureInput;
//! use cubework::core::moves::Move;
//! use cubework::core::types::{Direction, Face};
//! use cubework::engine::session::{Session, UndoOutcome};
//!
//! let mut session = Session::new();
//! let gesture = GestureInput::new(Face::Front, 0, 1, Direction::Right).unwrap();
//!
//! assert_eq!(session.apply_gesture(gesture), Move::U);
//! assert_eq!(session.move_count(), 1);
//!
//! assert_eq!(session.undo(), UndoOutcome::Undone(Move::U_PRIME));
//! assert!(session.is_solved());
//! ```

use rand::Rng;

use super::history::{History, HistoryEntry};
use super::scramble::random_gesture;
use crate::core::cube::CubeState;
use crate::core::gesture::GestureInput;
use crate::core::moves::Move;
use crate::core::types::{Direction, Face, Line, ScrambleCounting, TypeError};

/// The sticker the player last picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub face: Face,
    pub row: Line,
    pub col: Line,
}

impl Selection {
    /// The gesture formed by pushing `direction` on this sticker.
    pub fn gesture(&self, direction: Direction) -> GestureInput {
        GestureInput {
            face: self.face,
            row: self.row,
            col: self.col,
            direction,
        }
    }
}

/// Result of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The inverse move that was applied.
    Undone(Move),
    /// History was empty; nothing changed.
    NothingToUndo,
}

/// A single game in progress.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cube: CubeState,
    history: History,
    move_count: u32,
    selection: Option<Selection>,
}

impl Session {
    /// A solved cube with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a game from its saved parts.
    pub fn from_parts(cube: CubeState, history: History, move_count: u32) -> Self {
        Self {
            cube,
            history,
            move_count,
            selection: None,
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.cube
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Resolve a gesture, record its inverse, apply it, and count it.
    pub fn apply_gesture(&mut self, gesture: GestureInput) -> Move {
        let mv = gesture.resolve();
        self.apply_move(mv);
        mv
    }

    /// Apply a move given directly in notation. Counted like a gesture.
    pub fn apply_move(&mut self, mv: Move) {
        self.turn(mv, true);
    }

    /// Revert the most recent turn.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(HistoryEntry { inverse, counted }) = self.history.pop() else {
            return UndoOutcome::NothingToUndo;
        };

        inverse.apply(&mut self.cube);
        if counted {
            self.move_count = self.move_count.saturating_sub(1);
        }
        UndoOutcome::Undone(inverse)
    }

    /// Back to a solved cube with no history, no count and no selection.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply `n` random gestures. Each one is undoable.
    ///
    /// Returns the resolved moves in the order they were applied.
    pub fn scramble<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        rng: &mut R,
        counting: ScrambleCounting,
    ) -> Vec<Move> {
        let counted = counting == ScrambleCounting::Increment;
        let moves: Vec<Move> = (0..n)
            .map(|_| {
                let mv = random_gesture(rng).resolve();
                self.turn(mv, counted);
                mv
            })
            .collect();

        if counting == ScrambleCounting::Reset {
            self.move_count = 0;
        }
        moves
    }

    /// Replace the whole cube, dropping history that no longer applies.
    pub fn load_state(&mut self, cube: CubeState) {
        self.cube = cube;
        self.history.clear();
        self.move_count = 0;
    }

    /// Pick a sticker.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::LineOutOfRange` for a row or column outside `0..=2`.
    pub fn select(&mut self, face: Face, row: usize, col: usize) -> Result<(), TypeError> {
        self.selection = Some(Selection {
            face,
            row: Line::new(row)?,
            col: Line::new(col)?,
        });
        Ok(())
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Push an arrow on the current selection.
    ///
    /// Does nothing and returns `None` when no sticker is selected.
    pub fn push(&mut self, direction: Direction) -> Option<Move> {
        let gesture = self.selection?.gesture(direction);
        Some(self.apply_gesture(gesture))
    }

    fn turn(&mut self, mv: Move, counted: bool) {
        self.history.record_before_move(mv, counted);
        mv.apply(&mut self.cube);
        if counted {
            self.move_count = self.move_count.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Color;
    use crate::engine::scramble::seeded_rng;

    fn gesture(face: Face, row: usize, col: usize, direction: Direction) -> GestureInput {
        GestureInput::new(face, row, col, direction).unwrap()
    }

    mod gestures {
        use super::*;

        #[test]
        fn front_top_row_right_turns_u() {
            let mut session = Session::new();
            let mv = session.apply_gesture(gesture(Face::Front, 0, 0, Direction::Right));

            assert_eq!(mv, Move::U);
            assert_eq!(session.move_count(), 1);
            let cube = session.state();
            assert_eq!(cube.row(Face::Front, 0), [Color::Green; 3]);
            assert_eq!(cube.row(Face::Right, 0), [Color::Orange; 3]);
            assert_eq!(cube.row(Face::Back, 0), [Color::Blue; 3]);
            assert_eq!(cube.row(Face::Left, 0), [Color::Red; 3]);
            assert_eq!(cube.face(Face::Top), &[Color::Yellow; 9]);
            for face in [Face::Front, Face::Right, Face::Back, Face::Left] {
                assert_eq!(cube.row(face, 1), [face.home_color(); 3]);
                assert_eq!(cube.row(face, 2), [face.home_color(); 3]);
            }
        }

        #[test]
        fn four_r_turns_return_to_solved() {
            let mut session = Session::new();
            for _ in 0..4 {
                session.apply_move(Move::R);
            }
            assert!(session.is_solved());
            assert_eq!(session.move_count(), 4);
            assert_eq!(session.history().len(), 4);
        }
    }

    mod undo {
        use super::*;

        #[test]
        fn empty_history() {
            let mut session = Session::new();
            assert!(!session.can_undo());
            assert_eq!(session.undo(), UndoOutcome::NothingToUndo);
            assert_eq!(session.move_count(), 0);
            assert!(session.is_solved());
        }

        #[test]
        fn restores_previous_states() {
            let mut session = Session::new();
            let mut snapshots = vec![session.state().clone()];
            for mv in [Move::R, Move::U, Move::F_PRIME, Move::M, Move::S] {
                session.apply_move(mv);
                snapshots.push(session.state().clone());
            }

            snapshots.pop();
            while let Some(expected) = snapshots.pop() {
                assert!(matches!(session.undo(), UndoOutcome::Undone(_)));
                assert_eq!(session.state(), &expected);
            }
            assert!(!session.can_undo());
            assert_eq!(session.move_count(), 0);
        }

        #[test]
        fn reports_inverse_applied() {
            let mut session = Session::new();
            session.apply_move(Move::D_PRIME);
            assert_eq!(session.undo(), UndoOutcome::Undone(Move::D));
        }

        #[test]
        fn counter_floors_at_zero() {
            let mut history = History::new();
            history.record_before_move(Move::L, true);
            let mut session =
                Session::from_parts(Move::L.applied_to(&CubeState::solved()), history, 0);

            session.undo();
            assert_eq!(session.move_count(), 0);
            assert!(session.is_solved());
        }
    }

    mod scramble {
        use super::*;

        fn scramble_then_undo(counting: ScrambleCounting) -> (Session, u32) {
            let mut session = Session::new();
            session.apply_move(Move::R);
            session.apply_move(Move::U);
            let before = session.state().clone();
            let count_before = session.move_count();

            let mut rng = seeded_rng(42);
            let moves = session.scramble(20, &mut rng, counting);
            assert_eq!(moves.len(), 20);
            assert_eq!(session.history().len(), 22);

            for _ in 0..20 {
                assert!(matches!(session.undo(), UndoOutcome::Undone(_)));
            }
            assert_eq!(session.state(), &before);
            (session, count_before)
        }

        #[test]
        fn increment_counts_each_move() {
            let mut session = Session::new();
            session.scramble(20, &mut seeded_rng(42), ScrambleCounting::Increment);
            assert_eq!(session.move_count(), 20);

            let (session, count_before) = scramble_then_undo(ScrambleCounting::Increment);
            assert_eq!(session.move_count(), count_before);
        }

        #[test]
        fn preserve_leaves_counter() {
            let mut session = Session::new();
            session.apply_move(Move::E);
            session.scramble(20, &mut seeded_rng(42), ScrambleCounting::Preserve);
            assert_eq!(session.move_count(), 1);

            let (session, count_before) = scramble_then_undo(ScrambleCounting::Preserve);
            assert_eq!(session.move_count(), count_before);
        }

        #[test]
        fn reset_zeroes_counter() {
            let mut session = Session::new();
            session.apply_move(Move::E);
            session.scramble(20, &mut seeded_rng(42), ScrambleCounting::Reset);
            assert_eq!(session.move_count(), 0);

            // Undoing scramble moves never goes below zero.
            let (session, _) = scramble_then_undo(ScrambleCounting::Reset);
            assert_eq!(session.move_count(), 0);
        }

        #[test]
        fn from_solved_and_back() {
            let mut session = Session::new();
            session.scramble(20, &mut seeded_rng(42), ScrambleCounting::Preserve);
            assert!(session.state().validate().is_ok());
            for _ in 0..20 {
                session.undo();
            }
            assert!(session.is_solved());
            assert_eq!(session.undo(), UndoOutcome::NothingToUndo);
        }

        #[test]
        fn seeded_scramble_is_reproducible() {
            let mut a = Session::new();
            let mut b = Session::new();
            let first = a.scramble(20, &mut seeded_rng(9), ScrambleCounting::Preserve);
            let second = b.scramble(20, &mut seeded_rng(9), ScrambleCounting::Preserve);
            assert_eq!(first, second);
            assert_eq!(a.state(), b.state());
        }

        #[test]
        fn zero_moves_is_noop() {
            let mut session = Session::new();
            let moves = session.scramble(0, &mut seeded_rng(1), ScrambleCounting::Reset);
            assert!(moves.is_empty());
            assert!(session.is_solved());
            assert!(!session.can_undo());
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn push_without_selection_is_noop() {
            let mut session = Session::new();
            assert_eq!(session.push(Direction::Up), None);
            assert_eq!(session.move_count(), 0);
            assert!(!session.can_undo());
        }

        #[test]
        fn push_uses_selection() {
            let mut session = Session::new();
            session.select(Face::Front, 1, 2).unwrap();
            assert_eq!(session.push(Direction::Up), Some(Move::R));
            assert_eq!(session.push(Direction::Down), Some(Move::R_PRIME));
            assert!(session.is_solved());
            assert_eq!(session.move_count(), 2);
        }

        #[test]
        fn select_rejects_out_of_range() {
            let mut session = Session::new();
            assert!(session.select(Face::Top, 3, 0).is_err());
            assert!(session.selection().is_none());
        }

        #[test]
        fn clear_selection() {
            let mut session = Session::new();
            session.select(Face::Back, 0, 0).unwrap();
            session.clear_selection();
            assert_eq!(session.push(Direction::Left), None);
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        session.select(Face::Left, 2, 2).unwrap();
        session.scramble(5, &mut seeded_rng(5), ScrambleCounting::Increment);
        session.reset();

        assert!(session.is_solved());
        assert_eq!(session.move_count(), 0);
        assert!(!session.can_undo());
        assert!(session.selection().is_none());
    }

    #[test]
    fn load_state_drops_history() {
        let mut session = Session::new();
        session.apply_move(Move::B);
        let scrambled = Move::F.applied_to(&CubeState::solved());
        session.load_state(scrambled.clone());

        assert_eq!(session.state(), &scrambled);
        assert!(!session.can_undo());
        assert_eq!(session.move_count(), 0);
    }
}

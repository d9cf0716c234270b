//! core::journal
//!
//! The record kept for each turn so it can be undone.
//!
//! Entries are plain data shared by the engine undo stack and the
//! saved-game schema.

use serde::{Deserialize, Serialize};

use crate::core::moves::Move;

/// One undoable turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryEntry {
    /// The move that reverts the recorded turn.
    pub inverse: Move,
    /// Whether the turn added to the visible move counter.
    pub counted: bool,
}

impl HistoryEntry {
    /// Entry for `mv`, about to be applied.
    pub fn for_move(mv: Move, counted: bool) -> Self {
        Self {
            inverse: mv.inverse(),
            counted,
        }
    }

    /// The turn this entry reverts.
    pub fn original(&self) -> Move {
        self.inverse.inverse()
    }
}

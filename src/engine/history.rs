//! engine::history
//!
//! Undo stack of inverse moves.
//!
//! Every turn is a permutation with a known inverse, so a history entry only
//! needs the move that takes the cube back, not a snapshot of 54 stickers.
//! Entries are pushed *before* the turn is applied and popped on undo.
//!
//! # Example
//!
//! ```
//! use cubework::core::moves::Move;
//! use cubework::engine::history::History;
//!
//! let mut history = History::new();
//! history.record_before_move(Move::R, true);
//!
//! let entry = history.pop().unwrap();
//! assert_eq!(entry.inverse, Move::R_PRIME);
//! assert!(history.is_empty());
//! ```

use crate::core::moves::Move;

pub use crate::core::journal::HistoryEntry;

/// The undo stack. Unbounded for the lifetime of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from persisted entries, oldest first.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Record `mv` as about to be applied.
    pub fn record_before_move(&mut self, mv: Move, counted: bool) {
        self.entries.push(HistoryEntry::for_move(mv, counted));
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Turns in the order they were applied.
    pub fn applied_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries.iter().map(HistoryEntry::original)
    }
}

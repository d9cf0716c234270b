//! engine
//!
//! Game lifecycle: gestures and moves in, undoable state changes out.
//!
//! # Architecture
//!
//! The engine owns everything that changes over the life of a game:
//!
//! 1. **Session**: cube, move counter, selection
//! 2. **History**: inverse moves, newest last
//! 3. **Scramble**: random gestures from a caller-supplied generator
//! 4. **Game**: a session bound to a saved record
//!
//! # Invariants
//!
//! - Every turn records its inverse before the cube changes
//! - Undo applies exactly one stored inverse, or nothing
//! - The move counter never goes below zero
//!
//! # Example
//!
//! ```
//! use cubework::core::types::ScrambleCounting;
//! use cubework::engine::scramble::seeded_rng;
//! use cubework::engine::Session;
//!
//! let mut session = Session::new();
//! session.scramble(20, &mut seeded_rng(42), ScrambleCounting::Preserve);
//! for _ in 0..20 {
//!     session.undo();
//! }
//! assert!(session.is_solved());
//! ```

pub mod game;
pub mod history;
pub mod scramble;
pub mod session;

pub use game::{Game, GameError};
pub use history::{History, HistoryEntry};
pub use session::{Selection, Session, UndoOutcome};

use std::path::PathBuf;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Data directory override.
    pub data_dir: Option<PathBuf>,
    /// Game name override.
    pub game: Option<String>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

//! cubework - A Rubik's cube model with a gesture-driven move engine
//!
//! cubework keeps a 3x3x3 cube as 54 colored stickers, turns it through the
//! 18 canonical moves, translates picks on an unfolded net into those moves,
//! and keeps an undo history that survives between invocations of the
//! `cube` binary.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Session, undo history and scrambling
//! - [`core`] - Cube state, moves, gesture resolution, config, paths
//! - [`store`] - Saved games on disk
//! - [`ui`] - Output formatting and net rendering
//!
//! # Correctness Invariants
//!
//! cubework maintains the following invariants:
//!
//! 1. Every color appears on exactly nine stickers
//! 2. Centers never move
//! 3. Every turn is undoable, and undo restores the cube exactly
//! 4. A saved game is never accepted unless it decodes to a valid cube

pub mod cli;
pub mod core;
pub mod engine;
pub mod store;
pub mod ui;

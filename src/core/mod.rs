//! core
//!
//! Core domain types, cube model, and configuration for cubework.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Face, Color, Line, GameName, etc.
//! - [`cube`] - 54-sticker cube state, validation, face strings
//! - [`moves`] - The 18 canonical moves and the cycle table behind them
//! - [`journal`] - Per-turn undo records shared by engine and store
//! - [`gesture`] - Net picks resolved to canonical moves
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for cubework storage
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Every move is a permutation; stickers are never created or destroyed
//! - All resolution is table-driven and deterministic

pub mod config;
pub mod cube;
pub mod gesture;
pub mod journal;
pub mod moves;
pub mod paths;
pub mod types;

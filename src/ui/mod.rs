//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`net`] - Text rendering of the cube net
//!
//! # Design
//!
//! All output goes through this module to ensure consistent formatting
//! and proper handling of quiet and debug modes.

pub mod net;
pub mod output;

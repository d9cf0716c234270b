//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Loads the selected game through the engine
//! 3. Saves any change and formats output
//!
//! Handlers never edit cube state directly; every change goes through the
//! session so it lands in the undo history.

mod completion;
mod config_cmd;
mod game_cmd;
mod games;
mod helpers;
mod play;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use game_cmd::{load, new, show, status};
pub use games::{delete, games};
pub use play::{pick, reset, scramble, turn, undo};

use crate::cli::args::{Command, ConfigAction};
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::New { force } => game_cmd::new(ctx, force),
        Command::Show { face } => game_cmd::show(ctx, face),
        Command::Status => game_cmd::status(ctx),
        Command::Load { faces } => game_cmd::load(ctx, &faces),

        Command::Pick {
            face,
            row,
            col,
            direction,
        } => play::pick(ctx, face, row, col, direction),
        Command::Turn { moves } => play::turn(ctx, &moves),
        Command::Undo { count } => play::undo(ctx, count),
        Command::Reset => play::reset(ctx),
        Command::Scramble {
            moves,
            seed,
            counting,
        } => play::scramble(ctx, moves, seed, counting),

        Command::Games => games::games(ctx),
        Command::Delete { name } => games::delete(ctx, &name),

        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

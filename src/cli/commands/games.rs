//! games commands - list and delete saved games

use anyhow::{Context as _, Result};

use super::helpers::Workspace;
use crate::core::types::GameName;
use crate::engine::{Context, Game};
use crate::ui::output;

/// List saved games, marking the selected one.
pub fn games(ctx: &Context) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let names = ws.store.list().context("Failed to list games")?;

    if names.is_empty() {
        output::print("no saved games", ws.verbosity);
        return Ok(());
    }

    for name in names {
        let marker = if name == ws.game { "*" } else { " " };
        println!("{} {}", marker, name);
    }
    Ok(())
}

/// Delete a saved game.
pub fn delete(ctx: &Context, name: &str) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let name = GameName::new(name).with_context(|| format!("Invalid game name '{}'", name))?;

    Game::delete(&ws.store, &name).with_context(|| format!("Failed to delete game '{}'", name))?;

    output::print(format!("deleted game '{}'", name), ws.verbosity);
    Ok(())
}

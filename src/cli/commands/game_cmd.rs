//! game commands - new, show, status, load

use anyhow::{Context as _, Result};

use super::helpers::Workspace;
use crate::core::types::Face;
use crate::engine::{Context, Game};
use crate::ui::net::render_net;
use crate::ui::output;

/// Create a solved game.
pub fn new(ctx: &Context, force: bool) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let game = Game::create(&ws.store, ws.game.clone(), force)
        .with_context(|| format!("Failed to create game '{}'", ws.game))?;

    output::print(format!("created game '{}'", game.name()), ws.verbosity);
    Ok(())
}

/// Print the net, or one face string.
pub fn show(ctx: &Context, face: Option<Face>) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let game = ws.load_game()?;
    let cube = game.session.state();

    // Face strings are data, printed even under --quiet.
    match face {
        Some(face) => println!("{}", cube.serialize_face(face)),
        None => output::print(render_net(cube), ws.verbosity),
    }
    Ok(())
}

/// Print move count, solved flag and undo depth.
pub fn status(ctx: &Context) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let game = ws.load_game()?;
    let session = &game.session;

    println!("game: {}", game.name());
    println!("moves: {}", session.move_count());
    println!("solved: {}", if session.is_solved() { "yes" } else { "no" });
    println!("undo depth: {}", session.history().len());
    Ok(())
}

/// Overwrite faces from encoded strings.
///
/// The result must be a valid cube; history and counter are cleared.
pub fn load(ctx: &Context, faces: &[(Face, String)]) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let mut game = ws.load_game()?;

    let mut cube = game.session.state().clone();
    for (face, encoded) in faces {
        cube = cube
            .deserialize_face(*face, encoded)
            .with_context(|| format!("Invalid {} face", face))?;
    }
    cube.validate().context("Resulting cube is not valid")?;

    game.session.load_state(cube);
    ws.save_game(&game)?;

    output::print(format!("loaded {} face(s)", faces.len()), ws.verbosity);
    Ok(())
}

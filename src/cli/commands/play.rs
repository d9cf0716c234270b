//! play commands - pick, turn, undo, reset, scramble
//!
//! Each command loads the selected game, changes it through the
//! [`Session`](crate::engine::Session), and saves it back.

use anyhow::{bail, Context as _, Result};

use super::helpers::Workspace;
use crate::core::config::ScrambleDefaults;
use crate::core::gesture::GestureInput;
use crate::core::moves::{parse_sequence, Move};
use crate::core::types::{Direction, Face, ScrambleCounting};
use crate::engine::scramble::{entropy_rng, seeded_rng};
use crate::engine::{Context, Game, UndoOutcome};
use crate::ui::output::{self, format_moves, Verbosity};

/// Resolve a pick on the net and apply it.
pub fn pick(ctx: &Context, face: Face, row: usize, col: usize, direction: Direction) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let gesture = GestureInput::new(face, row, col, direction)
        .context("Row and column must be 0, 1 or 2")?;

    let mut game = ws.load_game()?;
    let mv = game.session.apply_gesture(gesture);
    output::debug(
        format!("{} row {} col {} {} -> {}", face, row, col, direction, mv),
        ws.verbosity,
    );
    ws.save_game(&game)?;

    output::print(mv, ws.verbosity);
    report_solved(&game, ws.verbosity);
    Ok(())
}

/// Apply moves written in notation.
pub fn turn(ctx: &Context, moves: &[String]) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let sequence: Vec<Move> = parse_sequence(&moves.join(" ")).context("Invalid move notation")?;

    let mut game = ws.load_game()?;
    for &mv in &sequence {
        game.session.apply_move(mv);
    }
    ws.save_game(&game)?;

    output::print(format_moves(&sequence), ws.verbosity);
    report_solved(&game, ws.verbosity);
    Ok(())
}

/// Undo up to `count` moves.
pub fn undo(ctx: &Context, count: usize) -> Result<()> {
    if count == 0 {
        bail!("Undo count must be at least 1");
    }
    let ws = Workspace::open(ctx)?;
    let mut game = ws.load_game()?;

    let mut undone = Vec::new();
    for _ in 0..count {
        match game.session.undo() {
            UndoOutcome::Undone(inverse) => undone.push(inverse),
            UndoOutcome::NothingToUndo => break,
        }
    }

    if undone.is_empty() {
        output::print("nothing to undo", ws.verbosity);
        return Ok(());
    }

    ws.save_game(&game)?;
    output::print(format!("undid: {}", format_moves(&undone)), ws.verbosity);
    if undone.len() < count {
        output::warn(
            format!("only {} of {} moves could be undone", undone.len(), count),
            ws.verbosity,
        );
    }
    Ok(())
}

/// Solved cube, empty history, counter zero.
pub fn reset(ctx: &Context) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let mut game = ws.load_game()?;
    game.session.reset();
    ws.save_game(&game)?;

    output::print("cube reset", ws.verbosity);
    Ok(())
}

/// Apply random gestures.
pub fn scramble(
    ctx: &Context,
    moves: Option<usize>,
    seed: Option<u64>,
    counting: Option<ScrambleCounting>,
) -> Result<()> {
    let ws = Workspace::open(ctx)?;
    let n = moves.unwrap_or_else(|| ws.config.scramble_moves());
    if n == 0 || n > ScrambleDefaults::MAX_MOVES {
        bail!(
            "Scramble length must be between 1 and {}, got {}",
            ScrambleDefaults::MAX_MOVES,
            n
        );
    }
    let counting = counting.unwrap_or_else(|| ws.config.scramble_counting());

    let mut rng = match seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };

    let mut game = ws.load_game()?;
    let applied = game.session.scramble(n, &mut rng, counting);
    output::debug(
        format!("scramble ({} counting): {}", counting, format_moves(&applied)),
        ws.verbosity,
    );
    ws.save_game(&game)?;

    output::print(format!("scrambled with {} moves", applied.len()), ws.verbosity);
    Ok(())
}

fn report_solved(game: &Game, verbosity: Verbosity) {
    if game.session.is_solved() {
        output::print(
            format!("solved in {} moves", game.session.move_count()),
            verbosity,
        );
    }
}

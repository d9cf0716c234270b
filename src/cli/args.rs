//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--data-dir <path>`: Where saved games live
//! - `--game <name>`: Which saved game to act on
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::{Direction, Face, ScrambleCounting};

/// cubework - A Rubik's cube you play from the command line
#[derive(Parser, Debug)]
#[command(name = "cube")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding saved games
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Saved game to use (default from config, else "default")
    #[arg(long, global = true, value_name = "NAME")]
    pub game: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game with a solved cube
    #[command(
        name = "new",
        after_help = "\
EXAMPLES:
    cube new
    cube --game practice new
    cube new --force        # discard the current game"
    )]
    New {
        /// Overwrite an existing game with the same name
        #[arg(long)]
        force: bool,
    },

    /// Show the cube as an unfolded net
    Show {
        /// Print a single face as its 9-letter string instead
        #[arg(long, value_name = "FACE")]
        face: Option<Face>,
    },

    /// Pick a sticker and push it in a direction
    #[command(
        name = "pick",
        long_about = "Pick a sticker on the net and push it.\n\n\
            Up and Down turn the layer holding the picked column; Left and Right \
            turn the layer holding the picked row. Rows and columns count from 0 \
            at the top-left of each face as drawn by `cube show`.",
        after_help = "\
EXAMPLES:
    # Turn the top layer (U) from the front face
    cube pick front 0 1 right

    # Turn the right layer (R) from the front face
    cube pick front 2 2 up"
    )]
    Pick {
        /// Face the sticker is on
        face: Face,
        /// Row of the sticker (0-2)
        row: usize,
        /// Column of the sticker (0-2)
        col: usize,
        /// Direction to push
        direction: Direction,
    },

    /// Apply moves in standard notation
    #[command(
        name = "turn",
        after_help = "\
EXAMPLES:
    cube turn R U R\\' U\\'
    cube turn \"R U R' U'\"
    cube turn M E S"
    )]
    Turn {
        /// Moves such as R, U', M (quote or escape primes)
        #[arg(required = true, value_name = "MOVES")]
        moves: Vec<String>,
    },

    /// Undo the most recent moves
    Undo {
        /// Number of moves to undo
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },

    /// Return to a solved cube and clear history
    Reset,

    /// Scramble the cube with random gestures
    #[command(
        name = "scramble",
        after_help = "\
EXAMPLES:
    cube scramble
    cube scramble --moves 30 --seed 42
    cube scramble --counting reset"
    )]
    Scramble {
        /// Number of random turns (default from config, else 20)
        #[arg(long, value_name = "N")]
        moves: Option<usize>,

        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,

        /// What the move counter does: increment, preserve, reset
        #[arg(long, value_name = "POLICY")]
        counting: Option<ScrambleCounting>,
    },

    /// Show move count, solved state and undo depth
    Status,

    /// Overwrite faces from 9-letter strings
    #[command(
        name = "load",
        long_about = "Overwrite one or more faces from 9-letter strings.\n\n\
            Letters are Y W G B O R, row-major. The resulting cube must have nine \
            stickers of each color with every center in its home color. Loading \
            clears the undo history and move counter.",
        after_help = "\
EXAMPLES:
    cube load front=OOOOOOOOO top=YYYYYYYYY"
    )]
    Load {
        /// Assignments of the form FACE=STRING
        #[arg(required = true, value_name = "FACE=STRING", value_parser = parse_face_assignment)]
        faces: Vec<(Face, String)>,
    },

    /// List saved games
    Games,

    /// Delete a saved game
    Delete {
        /// Name of the game
        name: String,
    },

    /// Get, set, or list configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    cube completion bash >> ~/.bashrc

    # Fish
    cube completion fish > ~/.config/fish/completions/cube.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Parse `face=STRING`.
fn parse_face_assignment(s: &str) -> Result<(Face, String), String> {
    let (face, encoded) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FACE=STRING, got '{}'", s))?;
    let face = face
        .trim()
        .parse::<Face>()
        .map_err(|_| format!("unknown face '{}'", face))?;
    Ok((face, encoded.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_pick() {
        let cli = Cli::try_parse_from(["cube", "pick", "Front", "0", "1", "right"]).unwrap();
        match cli.command {
            Command::Pick {
                face,
                row,
                col,
                direction,
            } => {
                assert_eq!(face, Face::Front);
                assert_eq!((row, col), (0, 1));
                assert_eq!(direction, Direction::Right);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_scramble_counting() {
        let cli = Cli::try_parse_from(["cube", "scramble", "--counting", "reset", "--seed", "42"])
            .unwrap();
        match cli.command {
            Command::Scramble {
                counting, seed, ..
            } => {
                assert_eq!(counting, Some(ScrambleCounting::Reset));
                assert_eq!(seed, Some(42));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cube", "status", "--game", "practice", "-q"]).unwrap();
        assert_eq!(cli.game.as_deref(), Some("practice"));
        assert!(cli.quiet);
    }

    #[test]
    fn face_assignment() {
        assert_eq!(
            parse_face_assignment("top=YYYYYYYYY").unwrap(),
            (Face::Top, "YYYYYYYYY".to_string())
        );
        assert!(parse_face_assignment("top").is_err());
        assert!(parse_face_assignment("middle=YYYYYYYYY").is_err());
    }

    #[test]
    fn unknown_direction_rejected() {
        assert!(Cli::try_parse_from(["cube", "pick", "front", "0", "0", "sideways"]).is_err());
    }
}

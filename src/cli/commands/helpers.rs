//! helpers - Shared setup for game commands
//!
//! Every game command needs the same three things: the loaded config, a
//! store rooted at the resolved data directory, and the name of the game
//! to act on. [`Workspace`] gathers them once.

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::paths::CubePaths;
use crate::core::types::GameName;
use crate::engine::{Context, Game, GameError};
use crate::store::GameStore;
use crate::ui::output::{self, Verbosity};

/// Config, store and selected game for one invocation.
pub struct Workspace {
    pub config: Config,
    pub store: GameStore,
    pub game: GameName,
    pub verbosity: Verbosity,
}

impl Workspace {
    /// Load config and resolve the data directory and game name.
    ///
    /// `--data-dir` and `--game` override the config file.
    pub fn open(ctx: &Context) -> Result<Self> {
        let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
        let config = Config::load().context("Failed to load config")?.config;

        if let Some(path) = config.loaded_from() {
            output::debug(format!("config: {}", path.display()), verbosity);
        }

        let paths = CubePaths::resolve(ctx.data_dir.as_deref(), config.data_dir())
            .context("No data directory found; pass --data-dir")?;
        output::debug(format!("data dir: {}", paths.data_dir.display()), verbosity);

        let game = match &ctx.game {
            Some(name) => GameName::new(name.as_str())
                .with_context(|| format!("Invalid game name '{}'", name))?,
            None => config.default_game(),
        };

        Ok(Self {
            config,
            store: GameStore::new(paths),
            game,
            verbosity,
        })
    }

    /// Open the selected game, or start a fresh solved one if none is saved.
    pub fn load_game(&self) -> Result<Game> {
        match Game::open(&self.store, &self.game) {
            Ok(game) => {
                output::debug(format!("loaded game '{}'", self.game), self.verbosity);
                Ok(game)
            }
            Err(GameError::NotFound(_)) => {
                output::debug(
                    format!("no saved game '{}', starting solved", self.game),
                    self.verbosity,
                );
                Ok(Game::new(self.game.clone()))
            }
            Err(e) => Err(e).with_context(|| format!("Failed to open game '{}'", self.game)),
        }
    }

    /// Save a game back to the store.
    pub fn save_game(&self, game: &Game) -> Result<()> {
        game.save(&self.store)
            .with_context(|| format!("Failed to save game '{}'", game.name()))?;
        output::debug(
            format!(
                "saved {}",
                self.store.paths().game_path(game.name()).display()
            ),
            self.verbosity,
        );
        Ok(())
    }
}

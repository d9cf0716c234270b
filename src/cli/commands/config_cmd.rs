//! config command - Get, set, or list configuration values

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

/// Get a configuration value.
pub fn get(_ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load().context("Failed to load config")?.config;
    let value = config.get_value(key)?;

    if !value.is_empty() {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let mut config = Config::load().context("Failed to load config")?.config;

    config.set(key, value)?;
    let path = config.save().context("Failed to write config")?;
    output::debug(format!("wrote {}", path.display()), verbosity);

    output::print(format!("Set {} = {}", key, value), verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(_ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load config")?.config;

    match config.loaded_from() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# (defaults)"),
    }

    for key in Config::KEYS {
        let value = config.get_value(key)?;
        if value.is_empty() {
            println!("{} = (not set)", key);
        } else {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

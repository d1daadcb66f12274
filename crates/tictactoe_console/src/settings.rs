//! Locating the game configuration for the binary.

use anyhow::{Context, Result};
use std::path::Path;
use tictactoe_engine::GameConfig;
use tracing::instrument;

/// Loads the config file if one was given, defaults otherwise.
#[instrument]
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

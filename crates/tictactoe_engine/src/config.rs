//! Game configuration: board size, marker symbols and display assets.

use crate::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, Marker};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display symbol for each marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSymbols {
    /// Symbol for [`Marker::X`].
    #[serde(default = "default_x_symbol")]
    pub x: String,
    /// Symbol for [`Marker::O`].
    #[serde(default = "default_o_symbol")]
    pub o: String,
}

impl MarkerSymbols {
    /// Returns the symbol drawn for `marker`.
    pub fn symbol(&self, marker: Marker) -> &str {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}

impl Default for MarkerSymbols {
    fn default() -> Self {
        Self {
            x: default_x_symbol(),
            o: default_o_symbol(),
        }
    }
}

/// Display asset per marker (an image path in the browser front-end).
///
/// The engine never looks inside these; it only hands them to views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerAssets {
    /// Asset for [`Marker::X`].
    #[serde(default = "default_x_asset")]
    pub x: String,
    /// Asset for [`Marker::O`].
    #[serde(default = "default_o_asset")]
    pub o: String,
}

impl MarkerAssets {
    /// Returns the asset associated with `marker`.
    pub fn asset(&self, marker: Marker) -> &str {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}

impl Default for MarkerAssets {
    fn default() -> Self {
        Self {
            x: default_x_asset(),
            o: default_o_asset(),
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Symbols drawn for each marker.
    #[serde(default)]
    markers: MarkerSymbols,

    /// Opaque display assets for each marker.
    #[serde(default)]
    assets: MarkerAssets,

    /// Names substituted for blank player names.
    #[serde(default = "default_names")]
    default_names: [String; 2],
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_x_symbol() -> String {
    "X".to_string()
}

fn default_o_symbol() -> String {
    "O".to_string()
}

fn default_x_asset() -> String {
    "./img/cross.svg".to_string()
}

fn default_o_asset() -> String {
    "./img/round.svg".to_string()
}

fn default_names() -> [String; 2] {
    ["Player 1".to_string(), "Player 2".to_string()]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            markers: MarkerSymbols::default(),
            assets: MarkerAssets::default(),
            default_names: default_names(),
        }
    }
}

impl GameConfig {
    /// Creates a default configuration with a different board size.
    ///
    /// # Errors
    ///
    /// Returns an error if `board_size` is zero or above [`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn with_board_size(board_size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the marker symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is blank or both are equal.
    #[instrument(skip(self))]
    pub fn with_markers(mut self, markers: MarkerSymbols) -> Result<Self, ConfigError> {
        self.markers = markers;
        self.validate()?;
        Ok(self)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration is playable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1"));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.markers.x.trim().is_empty() || self.markers.o.trim().is_empty() {
            return Err(ConfigError::new("Marker symbols must not be blank"));
        }
        if self.markers.x == self.markers.o {
            return Err(ConfigError::new(format!(
                "Marker symbols must differ (both are {:?})",
                self.markers.x
            )));
        }
        if self.default_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::new("Default player names must not be blank"));
        }
        Ok(())
    }

    /// Symbol drawn for `marker`.
    pub fn symbol(&self, marker: Marker) -> &str {
        self.markers.symbol(marker)
    }

    /// Asset associated with `marker`.
    pub fn asset(&self, marker: Marker) -> &str {
        self.assets.asset(marker)
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {message}")]
pub struct ConfigError {
    /// Error message.
    pub message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

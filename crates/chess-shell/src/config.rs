//! Configuration file loading for the shell.
//!
//! The shell reads `chess.toml` from the working directory unless another
//! path is given. A missing file means defaults.

use std::path::{Path, PathBuf};

use chess_core::{Color, Layout, LayoutError};
use chess_engine::{Board, TurnOrder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration or building the board
/// it describes.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured starting layout is malformed.
    #[error("Invalid layout: {0}")]
    LayoutError(#[from] LayoutError),
}

/// Session settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Turn enforcement, `"pawn-only"` or `"strict"`. Defaults to `"pawn-only"`.
    #[serde(default)]
    pub turn_order: TurnOrder,
    /// Print the board after every successful move. Defaults to true.
    #[serde(default = "default_show_after_move")]
    pub show_after_move: bool,
    /// Starting placement; the standard position when absent.
    #[serde(default)]
    pub layout: Option<String>,
    /// Start with Black to move. Only meaningful with a custom layout.
    #[serde(default)]
    pub black_to_move: bool,
}

fn default_show_after_move() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            turn_order: TurnOrder::default(),
            show_after_move: default_show_after_move(),
            layout: None,
            black_to_move: false,
        }
    }
}

impl ShellConfig {
    /// The default configuration file name.
    pub const DEFAULT_PATH: &'static str = "chess.toml";

    /// Loads configuration from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(Self::DEFAULT_PATH)
    }

    /// Builds the board this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LayoutError`] if `layout` cannot be parsed.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        let layout = match &self.layout {
            Some(text) => Layout::parse(text)?,
            None => Layout::starting(),
        };
        let side = if self.black_to_move {
            Color::Black
        } else {
            Color::White
        };
        Ok(Board::from_layout(&layout, side).with_turn_order(self.turn_order))
    }
}

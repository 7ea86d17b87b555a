//! Session configuration loaded from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Color, DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::ConfigError;
use crate::player::Player;

/// Session configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    /// Seats in order; the first entry opens every game.
    pub players: [PlayerConfig; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Color,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board: BoardConfig::default(),
            players: [
                PlayerConfig {
                    name: "Player 1".into(),
                    color: Color::Black,
                },
                PlayerConfig {
                    name: "Player 2".into(),
                    color: Color::White,
                },
            ],
        }
    }
}

impl PlayerConfig {
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.color)
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players[{i}].name must not be empty"
                )));
            }
        }
        if self.players[1].color != self.players[0].color.opponent() {
            return Err(ConfigError::Validation(format!(
                "players must have distinct colors, both are {}",
                self.players[0].color
            )));
        }
        Ok(())
    }
}

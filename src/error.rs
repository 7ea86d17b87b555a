//! Error types

use std::num::ParseIntError;
use std::path::PathBuf;

use crate::player::PlayerId;

/// Errors raised by direct grid access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
}

/// Reasons a stone placement is rejected. A rejected move never changes the
/// session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid coordinate: {0}")]
    OutOfBounds(#[from] GridError),

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("game is over, {winner:?} already won")]
    GameOver { winner: PlayerId },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors from parsing a `row,col` position string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePosError {
    #[error("expected row,col but got '{0}'")]
    Format(String),

    #[error("invalid coordinate: {0}")]
    Number(#[from] ParseIntError),
}

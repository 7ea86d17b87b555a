//! Two-player Gomoku match engine
//!
//! Board state and win detection for five-in-a-row on a configurable
//! rectangular grid (15x15 by default):
//! - Players alternate placing stones on empty cells
//! - Five in a row horizontally, vertically or diagonally wins
//! - A won game accepts no more moves until it is restarted
//!
//! # Architecture
//!
//! - [`board`]: cell states, positions and the [`Grid`]
//! - [`rules`]: win detection around the last placed stone
//! - [`engine`]: the [`MatchEngine`] session state machine
//! - [`player`]: player seats and identities
//! - [`config`]: TOML session configuration
//! - [`error`]: error types
//!
//! Rendering and input handling are left to the caller, which talks to the
//! engine only through `place_stone`, `restart`, `cell` and `dimensions`.
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{MatchEngine, Placement, PlayerId, Stone};
//!
//! let mut engine = MatchEngine::default();
//!
//! // Black opens in the centre
//! let result = engine.place_stone(7, 7).unwrap();
//! assert_eq!(result, Placement::Continue { next: PlayerId::Second });
//! assert_eq!(engine.cell(7, 7), Ok(Stone::Black));
//!
//! // Occupied cells are rejected without changing the turn
//! assert!(engine.place_stone(7, 7).is_err());
//! assert_eq!(engine.current_player(), PlayerId::Second);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod player;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Color, Grid, Pos, Stone, DEFAULT_COLS, DEFAULT_ROWS, WIN_LENGTH};
pub use config::{BoardConfig, GameConfig, PlayerConfig};
pub use engine::{MatchEngine, MatchState, Placement};
pub use error::{ConfigError, GridError, MoveError, ParsePosError};
pub use player::{Player, PlayerId};

//! Game rules for Gomoku
//!
//! Only the win condition lives here; move legality is enforced by the
//! match engine.

pub mod win;

// Re-exports for convenient access
pub use win::{check_anti_diagonal, check_col, check_diagonal, check_row, check_win};

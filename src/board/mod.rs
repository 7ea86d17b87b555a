//! Board representation for Gomoku

pub mod grid;


// Re-exports
pub use grid::Grid;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePosError;

/// Default board size (15x15)
pub const DEFAULT_ROWS: usize = 15;
pub const DEFAULT_COLS: usize = 15;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Stone color a player can be assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Cell state this color leaves on the board
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `dist` cells along `(dr, dc)`; None when that leaves the
    /// non-negative quadrant. Upper bounds are the grid's business.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, dist: isize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr * dist)?;
        let col = self.col.checked_add_signed(dc * dist)?;
        Some(Pos { row, col })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err(ParsePosError::Format(s.to_string()));
        }
        let row = parts[0].parse::<usize>()?;
        let col = parts[1].parse::<usize>()?;
        Ok(Pos::new(row, col))
    }
}

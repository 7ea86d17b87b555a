//! Rectangular grid of cells

use std::fmt;

use super::{Pos, Stone, DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::GridError;

/// Fixed-size game grid, row-major.
///
/// Every coordinate in `[0, rows) x [0, cols)` always holds exactly one
/// `Stone` value; anything outside is rejected with `GridError::OutOfBounds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Stone>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        Ok(Self::blank(rows, cols))
    }

    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Stone::Empty; rows * cols],
        }
    }

    /// `(rows, cols)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn index(&self, pos: Pos) -> Result<usize, GridError> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(pos.row * self.cols + pos.col)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Result<Stone, GridError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Stone at `pos`, or None when off the grid. Used by line walks that
    /// stop at the edge.
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Option<Stone> {
        self.get(pos).ok()
    }

    /// Overwrite a cell. No occupancy check; callers enforce game rules.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.cells[idx] = stone;
        Ok(())
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> Result<bool, GridError> {
        self.get(pos).map(|stone| stone == Stone::Empty)
    }

    /// Clear every cell back to `Stone::Empty`
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = Stone> + '_ {
        let start = row.min(self.rows) * self.cols;
        let end = if row < self.rows { start + self.cols } else { start };
        self.cells[start..end].iter().copied()
    }

    /// Cells of one column, top to bottom
    pub fn col(&self, col: usize) -> impl Iterator<Item = Stone> + '_ {
        let len = if col < self.cols { self.rows } else { 0 };
        self.cells.iter().skip(col).step_by(self.cols).take(len).copied()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self.row(row).map(Stone::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

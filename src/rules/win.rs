//! Win condition checking
//!
//! A move wins when any of four line checks succeeds for the stone just
//! placed. The checks are deliberately not symmetric:
//!
//! - Row and column: scan the whole line through the placed stone from one
//!   edge to the other and succeed as soon as a run reaches `WIN_LENGTH`.
//!   The run does not have to contain the placed stone.
//! - Diagonal and anti-diagonal: walk outward from the placed stone in both
//!   directions, counting matching neighbours only (the placed cell itself is
//!   excluded), and succeed when the neighbour count reaches `WIN_LENGTH - 1`.
//!
//! Both styles accept overlines: a run of six or more always contains a run
//! that reaches exactly `WIN_LENGTH`.

use tracing::instrument;

use crate::board::{Grid, Pos, Stone, WIN_LENGTH};

/// Diagonal axes as `(dr, dc)`; each is walked in both directions.
const DIAGONAL: (isize, isize) = (1, 1); // ↘
const ANTI_DIAGONAL: (isize, isize) = (1, -1); // ↙

/// Check whether placing `stone` at `pos` won the game.
#[instrument(level = "trace", skip(grid), ret)]
pub fn check_win(grid: &Grid, pos: Pos, stone: Stone) -> bool {
    if stone == Stone::Empty {
        return false;
    }

    check_row(grid, pos, stone)
        || check_col(grid, pos, stone)
        || check_diagonal(grid, pos, stone)
        || check_anti_diagonal(grid, pos, stone)
}

/// Full scan of the row containing `pos`.
pub fn check_row(grid: &Grid, pos: Pos, stone: Stone) -> bool {
    has_run(grid.row(pos.row), stone)
}

/// Full scan of the column containing `pos`.
pub fn check_col(grid: &Grid, pos: Pos, stone: Stone) -> bool {
    has_run(grid.col(pos.col), stone)
}

/// Neighbour count along the ↘ axis through `pos`.
pub fn check_diagonal(grid: &Grid, pos: Pos, stone: Stone) -> bool {
    neighbours_on_axis(grid, pos, DIAGONAL, stone) >= WIN_LENGTH - 1
}

/// Neighbour count along the ↙ axis through `pos`.
pub fn check_anti_diagonal(grid: &Grid, pos: Pos, stone: Stone) -> bool {
    neighbours_on_axis(grid, pos, ANTI_DIAGONAL, stone) >= WIN_LENGTH - 1
}

/// Running counter over a line, reset on any other cell.
fn has_run(line: impl Iterator<Item = Stone>, stone: Stone) -> bool {
    let mut count = 0;
    for cell in line {
        if cell == stone {
            count += 1;
            if count == WIN_LENGTH {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}

/// Matching stones on both sides of `pos` along `(dr, dc)`, not counting
/// `pos` itself.
fn neighbours_on_axis(grid: &Grid, pos: Pos, (dr, dc): (isize, isize), stone: Stone) -> usize {
    count_direction(grid, pos, dr, dc, stone) + count_direction(grid, pos, -dr, -dc, stone)
}

/// Walk away from `pos` until the edge or the first non-matching cell.
fn count_direction(grid: &Grid, pos: Pos, dr: isize, dc: isize, stone: Stone) -> usize {
    (1..)
        .map_while(|dist| pos.offset(dr, dc, dist))
        .map_while(|p| grid.stone_at(p))
        .take_while(|&cell| cell == stone)
        .count()
}

//! Full-grid moves.
//!
//! Only the leftward move is implemented directly; the other three
//! directions rotate the grid clockwise, slide left, and rotate back
//! (see [`Direction::rotations`]).

use serde::{Deserialize, Serialize};

use super::line::reduce_line;
use crate::core::{Direction, Grid, GRID_SIZE};

/// Result of applying one move, before any spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Grid after sliding and merging.
    pub grid: Grid,
    /// True if any row changed.
    pub changed: bool,
    /// Sum of merged tiles across all rows.
    pub score_delta: u64,
}

/// Reduce every row toward column 0.
#[must_use]
pub fn shift_left(grid: &Grid) -> MoveResult {
    let mut rows = [[0u32; GRID_SIZE]; GRID_SIZE];
    let mut changed = false;
    let mut score_delta = 0;

    for (out, &row) in rows.iter_mut().zip(grid.rows()) {
        let reduced = reduce_line(row);
        *out = reduced.line;
        changed |= reduced.changed;
        score_delta += reduced.score_delta;
    }

    MoveResult {
        grid: Grid::from_cells_unchecked(rows),
        changed,
        score_delta,
    }
}

/// Slide and merge in `direction`. Pure; never spawns.
///
/// When `changed` is false the returned grid equals the input.
///
/// ```
/// use rust_merge::core::{Direction, Grid};
/// use rust_merge::rules::apply_move;
///
/// let grid = Grid::from_rows(&[
///     vec![2i64, 0, 0, 0],
///     vec![2, 0, 0, 0],
///     vec![0, 0, 0, 0],
///     vec![0, 0, 0, 0],
/// ]).unwrap();
///
/// let result = apply_move(&grid, Direction::Down);
/// assert!(result.changed);
/// assert_eq!(result.grid.row(3), [4, 0, 0, 0]);
/// assert_eq!(result.score_delta, 4);
/// ```
#[must_use]
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let (before, after) = direction.rotations();
    let shifted = shift_left(&grid.rotated(before));
    MoveResult {
        grid: shifted.grid.rotated(after),
        ..shifted
    }
}

/// True if at least one direction would change the grid.
#[must_use]
pub fn has_moves(grid: &Grid) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| apply_move(grid, dir).changed)
}

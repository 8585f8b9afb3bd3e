//! The 4×4 tile grid.
//!
//! ## Invariants
//!
//! - Shape is always exactly 4×4 (enforced by the `[[u32; 4]; 4]` backing array).
//! - Every cell is either `0` (empty) or a power of two in `2..=MAX_TILE`.
//!
//! Values are checked by every constructor and setter, so code holding a
//! `Grid` never has to re-validate it. Input from outside the crate (nested
//! `i64` rows, JSON, snapshots) goes through [`Grid::from_rows`].
//!
//! ## Rotation
//!
//! [`Grid::rotate_clockwise`] is the single geometric primitive used by the
//! move resolver: cell `(r, c)` lands at `(c, 3 - r)`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GridError;

/// Width and height of the grid.
pub const GRID_SIZE: usize = 4;

/// Largest tile rank a grid may hold.
///
/// Two `MAX_TILE` tiles never merge, since the result would not fit in `u32`.
pub const MAX_TILE: u32 = 1 << 31;

/// A single grid row.
pub type Line = [u32; GRID_SIZE];

/// Cell coordinate, `row` and `col` both in `0..GRID_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterate over all 16 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Returns true if `value` may appear in a grid cell.
#[must_use]
pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two() && value <= MAX_TILE)
}

/// The 4×4 tile matrix.
///
/// `Grid` is `Copy`: the session hands out snapshots by value and never
/// shares its own board.
///
/// ## Example
///
/// ```
/// use rust_merge::core::{Grid, Position};
///
/// let grid = Grid::from_rows(&[
///     vec![2i64, 2, 0, 0],
///     vec![0, 0, 0, 0],
///     vec![0, 0, 4, 0],
///     vec![0, 0, 0, 0],
/// ]).unwrap();
///
/// assert_eq!(grid.get(Position::new(2, 2)), 4);
/// assert_eq!(grid.tile_count(), 3);
/// assert!(Grid::from_rows(&[vec![3i64, 0, 0, 0]]).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Grid {
    cells: [Line; GRID_SIZE],
}

impl Grid {
    /// An all-zero grid.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from a fixed-size array, validating every value.
    pub fn from_cells(cells: [Line; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, line) in cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTileValue {
                        row,
                        col,
                        value: i64::from(value),
                    });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Build a grid from loosely-shaped rows, as handed over by a UI layer.
    ///
    /// Fails with `InvalidGridShape` unless there are exactly four rows of
    /// four values, and with `InvalidTileValue` on the first bad cell.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GridError> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::InvalidGridShape {
                rows: rows.len(),
                cols: rows.first().map_or(0, |r| r.as_ref().len()),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != GRID_SIZE) {
            return Err(GridError::InvalidGridShape {
                rows: rows.len(),
                cols: bad.as_ref().len(),
            });
        }

        let mut cells = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.as_ref().iter().enumerate() {
                let tile = u32::try_from(value)
                    .ok()
                    .filter(|&v| is_valid_tile(v))
                    .ok_or(GridError::InvalidTileValue { row, col, value })?;
                cells[row][col] = tile;
            }
        }
        Ok(Self { cells })
    }

    /// Build a grid from 16 values in row-major order.
    pub fn from_flat(values: &[i64]) -> Result<Self, GridError> {
        if values.len() != GRID_SIZE * GRID_SIZE {
            return Err(GridError::InvalidGridShape {
                rows: values.len() / GRID_SIZE,
                cols: GRID_SIZE,
            });
        }
        let rows: Vec<&[i64]> = values.chunks(GRID_SIZE).collect();
        Self::from_rows(rows.as_slice())
    }

    /// Build a grid from rows already produced by the line reducer.
    ///
    /// Only for crate-internal producers that preserve the value invariant.
    pub(crate) const fn from_cells_unchecked(cells: [Line; GRID_SIZE]) -> Self {
        Self { cells }
    }

    // === Cell Access ===

    /// Value at a position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> u32 {
        self.cells[pos.row][pos.col]
    }

    /// Value at a position, or `None` if the position is outside the grid.
    #[must_use]
    pub fn try_get(&self, pos: Position) -> Option<u32> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Set a cell, rejecting values that are not valid tile ranks.
    pub fn set(&mut self, pos: Position, value: u32) -> Result<(), GridError> {
        if pos.row >= GRID_SIZE || pos.col >= GRID_SIZE {
            return Err(GridError::InvalidGridShape {
                rows: pos.row + 1,
                cols: pos.col + 1,
            });
        }
        if !is_valid_tile(value) {
            return Err(GridError::InvalidTileValue {
                row: pos.row,
                col: pos.col,
                value: i64::from(value),
            });
        }
        self.cells[pos.row][pos.col] = value;
        Ok(())
    }

    /// Replace every cell at once.
    pub fn replace(&mut self, other: Grid) {
        self.cells = other.cells;
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &[Line; GRID_SIZE] {
        &self.cells
    }

    /// Copy of a single row.
    #[must_use]
    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    // === Queries ===

    /// Empty positions in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Position; 16]> {
        Position::all().filter(|&p| self.get(p) == 0).collect()
    }

    /// True if every cell is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0)
    }

    /// True if no cell is zero.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Number of non-zero cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Highest tile on the grid (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    // === Transforms ===

    /// Rotate 90° clockwise: `(r, c) → (c, 3 - r)`.
    #[must_use]
    pub fn rotate_clockwise(&self) -> Grid {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (r, line) in self.cells.iter().enumerate() {
            for (c, &value) in line.iter().enumerate() {
                out[c][GRID_SIZE - 1 - r] = value;
            }
        }
        Grid { cells: out }
    }

    /// Rotate clockwise `turns` times (taken mod 4).
    #[must_use]
    pub fn rotated(&self, turns: u8) -> Grid {
        (0..turns % 4).fold(*self, |g, _| g.rotate_clockwise())
    }

    /// Reverse every row (left-right mirror image).
    #[must_use]
    pub fn mirrored(&self) -> Grid {
        let mut cells = self.cells;
        for line in &mut cells {
            line.reverse();
        }
        Grid { cells }
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<i64>> {
    fn from(grid: Grid) -> Self {
        grid.cells
            .iter()
            .map(|line| line.iter().map(|&v| i64::from(v)).collect())
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}, {}]", line[0], line[1], line[2], line[3])?;
        }
        Ok(())
    }
}

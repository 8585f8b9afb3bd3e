//! Win and terminal checks.

use super::resolver::has_moves;
use crate::core::Grid;

/// True if any tile has reached `threshold`.
#[must_use]
pub fn is_winning_grid(grid: &Grid, threshold: u32) -> bool {
    grid.rows().iter().flatten().any(|&v| v >= threshold)
}

/// True if no direction can change the grid.
///
/// Only meaningful for non-empty grids; an empty grid also has no moves.
#[must_use]
pub fn is_stuck(grid: &Grid) -> bool {
    !has_moves(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_at_threshold() {
        let mut cells = [[0u32; 4]; 4];
        cells[2][1] = 128;
        let grid = Grid::from_cells(cells).unwrap();
        assert!(is_winning_grid(&grid, 128));
        assert!(!is_winning_grid(&grid, 256));
    }

    #[test]
    fn test_small_tiles_do_not_win() {
        let grid = Grid::from_cells([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert!(!is_winning_grid(&grid, 128));
        assert!(is_stuck(&grid));
    }

    #[test]
    fn test_above_threshold_wins() {
        let mut cells = [[0u32; 4]; 4];
        cells[0][0] = 1024;
        assert!(is_winning_grid(&Grid::from_cells(cells).unwrap(), 128));
    }
}

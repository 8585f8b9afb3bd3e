//! Tile spawning.
//!
//! After every move that changed the grid, one tile of the lowest rank lands
//! on a uniformly random empty cell. The random choice goes through a
//! [`CellPicker`] so tests can script it.

use log::trace;

use crate::core::{is_valid_tile, CellPicker, EngineConfig, Grid, GridError, Position};

/// Place `value` on a random empty cell.
///
/// Returns the chosen position, or `Ok(None)` if the grid is full. A full
/// grid is a normal state, not an error.
///
/// # Errors
///
/// [`GridError::InvalidSpawnValue`] if `value` is zero or not a tile rank.
/// The grid is left untouched.
pub fn spawn_tile<P: CellPicker + ?Sized>(
    grid: &mut Grid,
    picker: &mut P,
    value: u32,
) -> Result<Option<Position>, GridError> {
    if value == 0 || !is_valid_tile(value) {
        return Err(GridError::InvalidSpawnValue(value));
    }

    let empty = grid.empty_cells();
    if empty.is_empty() {
        trace!("spawn skipped: grid is full");
        return Ok(None);
    }

    let index = picker.pick(empty.len()).min(empty.len() - 1);
    let pos = empty[index];
    grid.set(pos, value)?;
    trace!("spawned {value} at {pos}");
    Ok(Some(pos))
}

/// A fresh grid holding `config.initial_tiles` spawned tiles.
pub fn initialize_grid<P: CellPicker + ?Sized>(
    picker: &mut P,
    config: &EngineConfig,
) -> Result<Grid, GridError> {
    let mut grid = Grid::empty();
    for _ in 0..config.initial_tiles {
        spawn_tile(&mut grid, picker, config.spawn_value)?;
    }
    Ok(grid)
}

//! Error types.
//!
//! The engine only fails on malformed input: a grid that is not 4×4, a cell
//! that is not a valid tile rank, or a configuration that could never produce
//! a valid grid. Moving and spawning are total on valid grids.

use thiserror::Error;

/// Malformed grid input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be 4x4 (got {rows} rows, offending row has {cols} columns)")]
    InvalidGridShape { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) holds {value}, which is not 0 or a power of two >= 2")]
    InvalidTileValue { row: usize, col: usize, value: i64 },
    #[error("cannot spawn {0}: spawned tiles must be a power of two >= 2")]
    InvalidSpawnValue(u32),
}

/// Invalid engine configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("win threshold must be a tile rank of at least 4 (got {0})")]
    InvalidWinThreshold(u32),
    #[error("spawn value must be a tile rank (got {0})")]
    InvalidSpawnValue(u32),
    #[error("a fresh grid needs between 1 and 16 initial tiles (got {0})")]
    InvalidInitialTiles(usize),
}

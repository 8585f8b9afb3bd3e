//! Core engine types: grid, directions, RNG, configuration, errors.
//!
//! These are the building blocks every other module works with. Nothing
//! here moves tiles; see `rules` for that.

pub mod grid;
pub mod direction;
pub mod rng;
pub mod config;
pub mod error;

pub use grid::{Grid, Line, Position, GRID_SIZE, MAX_TILE, is_valid_tile};
pub use direction::{Direction, ParseDirectionError};
pub use rng::{CellPicker, GameRng, GameRngState};
pub use config::{EngineConfig, TerminalPolicy};
pub use error::{ConfigError, GridError};

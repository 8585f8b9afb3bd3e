//! Move resolution rules.
//!
//! - `line`: slide and merge a single row toward index 0
//! - `resolver`: full-grid moves built from `line` plus rotation
//! - `spawn`: random tile placement after a changed move
//! - `outcome`: win threshold and stuck-board checks
//!
//! Everything here is a pure function of its inputs except `spawn`, which
//! draws from a caller-supplied `CellPicker`.

pub mod line;
pub mod resolver;
pub mod spawn;
pub mod outcome;

pub use line::{reduce_line, LineReduction};
pub use resolver::{apply_move, has_moves, shift_left, MoveResult};
pub use spawn::{initialize_grid, spawn_tile};
pub use outcome::{is_stuck, is_winning_grid};

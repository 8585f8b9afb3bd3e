//! # rust-merge
//!
//! A 2048-style tile-merging puzzle engine, built to be embedded in a host
//! application that owns rendering, input and persistence.
//!
//! ## Design Principles
//!
//! 1. **One Merge Algorithm**: Only the leftward slide is implemented.
//!    The other directions rotate the grid, slide left, and rotate back.
//!
//! 2. **Data In, Data Out**: Moves return grids, score deltas and flags.
//!    Rendering is a separate collaborator (`render`).
//!
//! 3. **No Global State**: A `Session` owns its grid, score and RNG; hosts
//!    hold as many as they like.
//!
//! 4. **Deterministic**: The only randomness is the spawn position, drawn
//!    through the `CellPicker` trait from a seedable ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Grid, directions, RNG, configuration, errors
//! - `rules`: Line reduction, directional moves, spawning, win checks
//! - `session`: Caller-owned game session and snapshots
//! - `render`: Text renderers for grid snapshots

pub mod core;
pub mod rules;
pub mod session;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Grid, Line, Position, GRID_SIZE, MAX_TILE,
    Direction, ParseDirectionError,
    CellPicker, GameRng, GameRngState,
    EngineConfig, TerminalPolicy,
    ConfigError, GridError,
};

pub use crate::rules::{
    apply_move, has_moves, initialize_grid, is_stuck, is_winning_grid, reduce_line, spawn_tile,
    LineReduction, MoveResult,
};

pub use crate::session::{Session, SessionError, SessionSnapshot, SessionStatus, Turn, TurnRecord};

pub use crate::render::{GridRenderer, IconRenderer, TextRenderer};

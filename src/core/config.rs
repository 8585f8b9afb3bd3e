//! Engine configuration.
//!
//! Hosts configure the engine at startup with an `EngineConfig`:
//! - `win_threshold`: tile rank that counts as a win
//! - `spawn_value`: rank of every spawned tile
//! - `initial_tiles`: tiles placed on a fresh grid
//! - `terminal_policy`: whether a session ever stops accepting moves
//!
//! Defaults reproduce the demo's behavior: win at 128, spawn 2s, two starting
//! tiles, and keep playing forever.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::{is_valid_tile, GRID_SIZE};

/// Whether a session halts on a win or on a stuck board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalPolicy {
    /// Never halt. Wins are reported on each turn, full boards just ignore
    /// moves that change nothing.
    #[default]
    KeepPlaying,
    /// Enter `Won` on reaching the threshold and `Lost` when no move is left.
    Halt,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Any tile at or above this rank wins (default: 128).
    pub win_threshold: u32,

    /// Rank of spawned tiles (default: 2).
    pub spawn_value: u32,

    /// Tiles spawned on a fresh grid (default: 2).
    pub initial_tiles: usize,

    /// Halting behavior (default: keep playing).
    pub terminal_policy: TerminalPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_threshold: 128,
            spawn_value: 2,
            initial_tiles: 2,
            terminal_policy: TerminalPolicy::KeepPlaying,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the spawned tile rank.
    #[must_use]
    pub fn with_spawn_value(mut self, value: u32) -> Self {
        self.spawn_value = value;
        self
    }

    /// Set the number of starting tiles.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Set the terminal policy.
    #[must_use]
    pub fn with_terminal_policy(mut self, policy: TerminalPolicy) -> Self {
        self.terminal_policy = policy;
        self
    }

    /// Check that the configuration can only produce valid grids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_value == 0 || !is_valid_tile(self.spawn_value) {
            return Err(ConfigError::InvalidSpawnValue(self.spawn_value));
        }
        if self.win_threshold < 4 || !is_valid_tile(self.win_threshold) {
            return Err(ConfigError::InvalidWinThreshold(self.win_threshold));
        }
        if self.initial_tiles == 0 || self.initial_tiles > GRID_SIZE * GRID_SIZE {
            return Err(ConfigError::InvalidInitialTiles(self.initial_tiles));
        }
        Ok(())
    }
}

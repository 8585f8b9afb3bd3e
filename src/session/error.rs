//! Session-level errors.

use thiserror::Error;

use super::game::SessionStatus;
use crate::core::{ConfigError, GridError};

/// Errors surfaced by a [`Session`](super::Session).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session has not been started; call enter() or new_game() first")]
    NotStarted,
    #[error("game is over ({0})")]
    GameOver(SessionStatus),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

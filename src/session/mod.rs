//! Game sessions.
//!
//! A `Session` is the explicit, caller-owned home of one game's grid, score
//! and RNG. The surrounding application creates one per player, calls
//! `enter()` when the game view opens, and feeds it directional input.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --enter()--> Playing --play()--> Playing ...
//! ```
//!
//! Under `TerminalPolicy::Halt` a session additionally moves to `Won` or
//! `Lost` and rejects further moves.

mod error;
mod game;

pub use error::SessionError;
pub use game::{Session, SessionSnapshot, SessionStatus, Turn, TurnRecord};

//! Move commands.
//!
//! A `Direction` is stateless input. Hosts usually build one from a key
//! event; both browser key names (`"ArrowUp"`) and plain names (`"up"`)
//! parse.
//!
//! Every direction other than `Left` is resolved by rotating the grid
//! clockwise, sliding left, and rotating back. The rotation counts live in
//! [`Direction::rotations`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A directional move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Clockwise quarter turns applied before and after the leftward slide.
    ///
    /// Each pair sums to a multiple of four, so the grid always ends in its
    /// original orientation.
    #[must_use]
    pub const fn rotations(self) -> (u8, u8) {
        match self {
            Direction::Left => (0, 0),
            Direction::Right => (2, 2),
            Direction::Up => (3, 1),
            Direction::Down => (1, 3),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Input that names no direction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown direction {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("Arrow").unwrap_or(s);
        match name.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotations_return_to_orientation() {
        for dir in Direction::ALL {
            let (before, after) = dir.rotations();
            assert_eq!((before + after) % 4, 0, "{dir}");
        }
    }

    #[test]
    fn test_rotation_table() {
        assert_eq!(Direction::Left.rotations(), (0, 0));
        assert_eq!(Direction::Right.rotations(), (2, 2));
        assert_eq!(Direction::Up.rotations(), (3, 1));
        assert_eq!(Direction::Down.rotations(), (1, 3));
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("ArrowUp".parse(), Ok(Direction::Up));
        assert_eq!("ArrowDown".parse(), Ok(Direction::Down));
        assert_eq!("ArrowLeft".parse(), Ok(Direction::Left));
        assert_eq!("ArrowRight".parse(), Ok(Direction::Right));
        assert_eq!("LEFT".parse(), Ok(Direction::Left));
        assert_eq!(
            "Enter".parse::<Direction>(),
            Err(ParseDirectionError("Enter".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse(), Ok(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}

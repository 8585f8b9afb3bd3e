//! Deterministic random cell selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawn positions
//! - **Mockable**: The engine only sees the [`CellPicker`] trait
//! - **Serializable**: O(1) state capture and restore for session snapshots
//!
//! ```
//! use rust_merge::core::{CellPicker, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick(14), b.pick(14));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The engine's only source of nondeterminism.
///
/// Given `len` candidate cells, return the index of the chosen one.
/// Implementations must return a value in `0..len`; `len` is never zero.
pub trait CellPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Seedable RNG used for tile spawns.
///
/// Uses ChaCha8 so that a saved word position restores the exact stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl CellPicker for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick(16), rng2.pick(16));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.pick(1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.pick(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_in_range() {
        let mut rng = GameRng::new(7);
        for len in 1..=16 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
        assert_eq!(rng.pick(1), 0);
    }

    #[test]
    fn test_pick_covers_all_cells() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 14];
        for _ in 0..1000 {
            seen[rng.pick(14)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.pick(16);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pick(16)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.pick(16)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

//! Single-line reduction: the only place tiles merge.
//!
//! A line is reduced toward index 0 in four steps:
//! 1. compact out the zeros
//! 2. one forward sweep merging equal neighbours
//! 3. compact again
//! 4. pad back to four cells
//!
//! The sweep never revisits a freshly doubled cell, so `[2, 2, 2, 0]`
//! becomes `[4, 2, 0, 0]` and each tile merges at most once per move.

use smallvec::SmallVec;

use crate::core::{Line, GRID_SIZE};

/// Outcome of reducing one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineReduction {
    /// The reduced line, tiles packed toward index 0.
    pub line: Line,
    /// Sum of the tiles created by merges.
    pub score_delta: u64,
    /// True if `line` differs from the input.
    pub changed: bool,
}

/// Slide and merge one line toward index 0.
///
/// ```
/// use rust_merge::rules::reduce_line;
///
/// let r = reduce_line([2, 2, 2, 2]);
/// assert_eq!(r.line, [4, 4, 0, 0]);
/// assert_eq!(r.score_delta, 8);
/// ```
#[must_use]
pub fn reduce_line(input: Line) -> LineReduction {
    let mut tiles: SmallVec<[u32; GRID_SIZE]> = input.iter().copied().filter(|&v| v != 0).collect();
    let mut score_delta = 0u64;

    for i in 0..tiles.len().saturating_sub(1) {
        if tiles[i] != 0 && tiles[i] == tiles[i + 1] {
            // A pair of MAX_TILE tiles has nowhere to go.
            if let Some(doubled) = tiles[i].checked_mul(2) {
                tiles[i] = doubled;
                tiles[i + 1] = 0;
                score_delta += u64::from(doubled);
            }
        }
    }

    let mut line = [0u32; GRID_SIZE];
    for (slot, tile) in line.iter_mut().zip(tiles.into_iter().filter(|&v| v != 0)) {
        *slot = tile;
    }

    LineReduction {
        line,
        score_delta,
        changed: line != input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TILE;

    #[test]
    fn test_empty_line() {
        let r = reduce_line([0, 0, 0, 0]);
        assert_eq!(r.line, [0, 0, 0, 0]);
        assert_eq!(r.score_delta, 0);
        assert!(!r.changed);
    }

    #[test]
    fn test_slide_without_merge() {
        let r = reduce_line([0, 2, 0, 4]);
        assert_eq!(r.line, [2, 4, 0, 0]);
        assert_eq!(r.score_delta, 0);
        assert!(r.changed);
    }

    #[test]
    fn test_already_packed_is_unchanged() {
        let r = reduce_line([2, 4, 8, 0]);
        assert_eq!(r.line, [2, 4, 8, 0]);
        assert!(!r.changed);
    }

    #[test]
    fn test_three_equal_merge_first_pair_only() {
        let r = reduce_line([2, 2, 2, 0]);
        assert_eq!(r.line, [4, 2, 0, 0]);
        assert_eq!(r.score_delta, 4);
    }

    #[test]
    fn test_four_equal_merge_twice() {
        let r = reduce_line([2, 2, 2, 2]);
        assert_eq!(r.line, [4, 4, 0, 0]);
        assert_eq!(r.score_delta, 8);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        // 2+2 makes a 4, which must not absorb the following 4.
        let r = reduce_line([2, 2, 4, 0]);
        assert_eq!(r.line, [4, 4, 0, 0]);
        assert_eq!(r.score_delta, 4);
    }

    #[test]
    fn test_merge_across_gaps() {
        let r = reduce_line([4, 0, 0, 4]);
        assert_eq!(r.line, [8, 0, 0, 0]);
        assert_eq!(r.score_delta, 8);
    }

    #[test]
    fn test_merge_second_pair() {
        let r = reduce_line([8, 4, 4, 0]);
        assert_eq!(r.line, [8, 8, 0, 0]);
        assert_eq!(r.score_delta, 8);
    }

    #[test]
    fn test_max_tiles_never_merge() {
        let r = reduce_line([MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(r.line, [MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(r.score_delta, 0);
        assert!(!r.changed);
    }
}

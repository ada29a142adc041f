//! Backtracking matcher: decides whether a word exists as a chain of adjacent
//! cells in the grid with no cell visited twice.
//!
//! The search only decides existence; it short-circuits on the first complete
//! path and never enumerates alternatives past that point.

use rustc_hash::FxHashSet;

use crate::coord::Pos;
use crate::grid::Grid;

/// Returns true iff `word` can be traced in `grid` as a path of
/// Chebyshev-adjacent cells that never reuses a cell.
///
/// An empty word is never found. A single-letter word is found iff the letter
/// occurs anywhere in the grid.
pub fn word_has_path(grid: &Grid, word: &str) -> bool {
    let letters = word.as_bytes();
    let Some(&first) = letters.first() else {
        return false;
    };

    let starts = grid.positions_of(first);
    if starts.is_empty() {
        return false;
    }
    if letters.len() == 1 {
        return true;
    }

    starts.into_iter().any(|start| {
        let mut visited = FxHashSet::default();
        visited.insert(start);
        extend(grid, letters, 0, start, &mut visited)
    })
}

/// Extends a partial path that has matched `word[..=matched]` ending at `pos`,
/// having consumed exactly the cells in `visited`.
///
/// Ownership of `visited`: a single continuation keeps the same set (no
/// sibling can observe it), while multiple candidates each branch on their own
/// clone so one branch can never corrupt the history seen by another.
fn extend(grid: &Grid, word: &[u8], matched: usize, pos: Pos, visited: &mut FxHashSet<Pos>) -> bool {
    if matched + 1 == word.len() {
        return true;
    }

    let wanted = word[matched + 1];
    let candidates: Vec<Pos> = grid
        .neighbors_of(pos)
        .into_iter()
        .filter(|&n| grid.letter_at(n) == wanted && !visited.contains(&n))
        .collect();

    if candidates.len() == 1 {
        let only = candidates[0];
        visited.insert(only);
        return extend(grid, word, matched + 1, only, visited);
    }

    candidates.into_iter().any(|cand| {
        let mut branch = visited.clone();
        branch.insert(cand);
        extend(grid, word, matched + 1, cand, &mut branch)
    })
}

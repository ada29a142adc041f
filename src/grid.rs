use std::fmt;

use crate::coord::Pos;

/// An immutable cubic grid of uppercase letters.
///
/// Cells are stored densely in scan order (ascending `i`, then `j`, then `k`),
/// so `Pos -> cell` lookup is O(1). The grid is never mutated after
/// construction and is freely shared across worker threads.
#[derive(Clone, Debug)]
pub struct Grid {
    side: i16,
    cells: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised when constructing a [`Grid`] from raw cells.
pub enum GridError {
    /// `cells.len()` is not `side^3` (or `side < 1`).
    NotCubic { side: i16, cells: usize },
    /// A cell is not an ASCII uppercase letter.
    InvalidCell { index: usize, value: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::NotCubic { side, cells } => {
                write!(f, "grid is not cubic: side={side}, cells={cells}")
            }
            GridError::InvalidCell { index, value } => {
                write!(f, "cell {index} is not an uppercase letter: 0x{value:02x}")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Builds a grid from cells laid out in scan order (ascending `i`, then
    /// `j`, then `k`).
    pub fn from_cells(side: i16, cells: Vec<u8>) -> Result<Self, GridError> {
        if side < 1 || cells.len() != (side as usize).pow(3) {
            return Err(GridError::NotCubic {
                side,
                cells: cells.len(),
            });
        }
        if let Some(index) = cells.iter().position(|c| !c.is_ascii_uppercase()) {
            return Err(GridError::InvalidCell {
                index,
                value: cells[index],
            });
        }
        Ok(Self { side, cells })
    }

    #[inline]
    pub fn side(&self) -> i16 {
        self.side
    }

    #[inline]
    pub fn in_bounds(&self, p: Pos) -> bool {
        p.i >= 0 && p.i < self.side && p.j >= 0 && p.j < self.side && p.k >= 0 && p.k < self.side
    }

    #[inline]
    fn index(&self, p: Pos) -> usize {
        let s = self.side as usize;
        ((p.i as usize) * s + (p.j as usize)) * s + (p.k as usize)
    }

    /// The letter at `p`.
    ///
    /// An out-of-bounds position is an internal invariant violation (neighbor
    /// generation is already clipped to bounds), so this asserts rather than
    /// returning a recoverable error.
    #[inline]
    pub fn letter_at(&self, p: Pos) -> u8 {
        assert!(self.in_bounds(p), "position out of bounds: {p:?}");
        self.cells[self.index(p)]
    }

    /// All cells holding `letter`, in scan order.
    pub fn positions_of(&self, letter: u8) -> Vec<Pos> {
        let mut out = Vec::new();
        for i in 0..self.side {
            for j in 0..self.side {
                for k in 0..self.side {
                    let p = Pos::new(i, j, k);
                    if self.cells[self.index(p)] == letter {
                        out.push(p);
                    }
                }
            }
        }
        out
    }

    /// All positions within Chebyshev distance 1 of `p`, excluding `p` itself,
    /// clipped to grid bounds (no wraparound). Deterministic ascending order.
    pub fn neighbors_of(&self, p: Pos) -> Vec<Pos> {
        let mut out = Vec::with_capacity(26);
        for i in (p.i - 1).max(0)..=(p.i + 1).min(self.side - 1) {
            for j in (p.j - 1).max(0)..=(p.j + 1).min(self.side - 1) {
                for k in (p.k - 1).max(0)..=(p.k + 1).min(self.side - 1) {
                    let n = Pos::new(i, j, k);
                    if n != p {
                        debug_assert_eq!(n.chebyshev(p), 1);
                        out.push(n);
                    }
                }
            }
        }
        out
    }
}

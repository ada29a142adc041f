/// A cell position in the grid.
///
/// Equality and hashing are structural over all three coordinates, so nothing
/// here assumes an upper bound on the grid side length.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pos {
    pub i: i16,
    pub j: i16,
    pub k: i16,
}

impl Pos {
    #[inline]
    pub const fn new(i: i16, j: i16, k: i16) -> Self {
        Self { i, j, k }
    }

    /// Chebyshev distance: two distinct cells are adjacent iff this is 1.
    #[inline]
    pub fn chebyshev(self, other: Pos) -> i16 {
        (self.i - other.i)
            .abs()
            .max((self.j - other.j).abs())
            .max((self.k - other.k).abs())
    }
}

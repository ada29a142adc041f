//! Builtin grid instances.

use crate::grid::Grid;

/// Layer-major layout of the reference cube: `LAYERS[i][j]` is the row of
/// cells at fixed `i`, `j`, ascending `k`.
const LAYERS: [[&[u8; 4]; 4]; 4] = [
    [b"AJFE", b"APUW", b"OGMR", b"MNXK"],
    [b"DNSI", b"FODS", b"JEGI", b"WKPR"],
    [b"EQMF", b"RKID", b"DMIR", b"EOSD"],
    [b"RTSL", b"DKPI", b"SPOI", b"JQDT"],
];

/// The fixed 4×4×4 reference cube.
pub fn reference() -> Grid {
    let mut cells = Vec::with_capacity(64);
    for layer in LAYERS {
        for row in layer {
            cells.extend_from_slice(row);
        }
    }
    Grid::from_cells(4, cells).expect("builtin cube layout is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Pos;

    #[test]
    fn reference_cube_addresses_in_layer_row_column_order() {
        let g = reference();
        assert_eq!(g.side(), 4);
        assert_eq!(g.letter_at(Pos::new(0, 0, 0)), b'A');
        assert_eq!(g.letter_at(Pos::new(0, 2, 1)), b'G');
        assert_eq!(g.letter_at(Pos::new(2, 0, 1)), b'Q');
        assert_eq!(g.letter_at(Pos::new(3, 3, 3)), b'T');
    }
}

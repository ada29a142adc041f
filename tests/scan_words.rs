use rustc_hash::FxHashSet;
use wordcube::coord::Pos;
use wordcube::cubes;
use wordcube::grid::Grid;
use wordcube::solver::{scan, scan_with_workers};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn set(list: &[&str]) -> FxHashSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// A side-4 grid filled with 'X' except for the given cells.
fn grid_with(cells: &[(Pos, u8)]) -> Grid {
    let side = 4i16;
    let s = side as usize;
    let mut raw = vec![b'X'; s * s * s];
    for &(p, letter) in cells {
        let idx = ((p.i as usize) * s + (p.j as usize)) * s + (p.k as usize);
        raw[idx] = letter;
    }
    Grid::from_cells(side, raw).unwrap()
}

#[test]
fn found_set_keeps_present_words_and_drops_absent_ones() {
    let g = grid_with(&[(Pos::new(0, 0, 0), b'A')]);
    let found = scan(&g, &words(&["A", "ZZ"]));
    assert_eq!(found, set(&["A"]));
    assert_eq!(found.len(), 1);
}

#[test]
fn empty_string_word_is_excluded() {
    let g = cubes::reference();
    let found = scan(&g, &words(&["", "GO"]));
    assert_eq!(found, set(&["GO"]));
}

#[test]
fn word_with_many_paths_appears_once() {
    // Every cell is an A, so AAA has a huge number of valid paths.
    let g = Grid::from_cells(4, vec![b'A'; 64]).unwrap();
    let found = scan(&g, &words(&["AAA", "AAA", "AB"]));
    assert_eq!(found, set(&["AAA"]));
}

#[test]
fn found_set_is_independent_of_worker_count() {
    let g = cubes::reference();
    let dict = words(&["GO", "DOG", "A", "ZZ", "OK", "RID", "QQQQ", ""]);

    let sequential = scan_with_workers(&g, &dict, 1).unwrap();
    let parallel = scan_with_workers(&g, &dict, 4).unwrap();
    let global = scan(&g, &dict);

    assert_eq!(sequential, parallel);
    assert_eq!(sequential, global);
    assert!(sequential.contains("GO"));
    assert!(sequential.contains("DOG"));
    assert!(!sequential.contains("ZZ"));
    assert!(!sequential.contains(""));
}

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use serde::Deserialize;
use wordcube::cubes;
use wordcube::grid::Grid;
use wordcube::solver;

#[derive(Debug, Clone, Deserialize)]
struct GridFile {
    /// `layers[i][j][k]`: layer-major rows of single characters.
    layers: Vec<Vec<Vec<char>>>,
}

#[derive(Debug)]
struct Args {
    dictionary: PathBuf,
    grid: Option<PathBuf>,
    workers: Option<usize>,
    json: bool,
}

fn usage() -> ! {
    eprintln!("Usage: cube_search <dictionary.txt> [--grid <grid.json>] [--workers <n>] [--json]");
    std::process::exit(2);
}

fn parse_args() -> Args {
    let mut args = std::env::args().skip(1);
    let mut dictionary = None;
    let mut grid = None;
    let mut workers = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--grid" => {
                let Some(path) = args.next() else { usage() };
                grid = Some(PathBuf::from(path));
            }
            "--workers" => {
                let Some(n) = args.next() else { usage() };
                match n.parse::<usize>() {
                    Ok(n) if n >= 1 => workers = Some(n),
                    _ => {
                        eprintln!("--workers must be a positive integer, got {n}");
                        std::process::exit(2);
                    }
                }
            }
            "--json" => json = true,
            _ if dictionary.is_none() => dictionary = Some(PathBuf::from(arg)),
            _ => usage(),
        }
    }

    let Some(dictionary) = dictionary else { usage() };
    Args {
        dictionary,
        grid,
        workers,
        json,
    }
}

/// Trims, uppercases and drops empty lines; the core requires an
/// already-normalized word list.
fn load_dictionary(path: &PathBuf) -> Result<Vec<String>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    Ok(text
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| !word.is_empty())
        .collect())
}

fn load_grid(path: &PathBuf) -> Result<Grid, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let file: GridFile = serde_json::from_slice(&bytes)
        .map_err(|e| format!("invalid JSON in {}: {e}", path.display()))?;
    grid_from_layers(&file)
}

/// Flattens `layers[i][j][k]` into scan order. Every layer must hold `side`
/// rows of `side` cells; a jagged array whose cells happen to total `side^3`
/// would otherwise build a silently scrambled grid.
fn grid_from_layers(file: &GridFile) -> Result<Grid, String> {
    let side = file.layers.len();
    let mut cells = Vec::with_capacity(side * side * side);
    for (i, layer) in file.layers.iter().enumerate() {
        if layer.len() != side {
            return Err(format!(
                "layer {i} has {} rows, expected {side}",
                layer.len()
            ));
        }
        for (j, row) in layer.iter().enumerate() {
            if row.len() != side {
                return Err(format!(
                    "layer {i} row {j} has {} cells, expected {side}",
                    row.len()
                ));
            }
            for &c in row {
                if !c.is_ascii() {
                    return Err(format!("grid cell {c:?} is not ASCII"));
                }
                cells.push(c as u8);
            }
        }
    }
    Grid::from_cells(side as i16, cells).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    let words = match load_dictionary(&args.dictionary) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let grid = match &args.grid {
        Some(path) => match load_grid(path) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => cubes::reference(),
    };

    tracing::info!(
        words = words.len(),
        side = grid.side(),
        workers = args.workers,
        "starting scan"
    );

    let start = Instant::now();
    let found = match args.workers {
        Some(n) => match solver::scan_with_workers(&grid, &words, n) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => solver::scan(&grid, &words),
    };
    let elapsed = start.elapsed();

    if args.json {
        let mut sorted: Vec<&String> = found.iter().collect();
        sorted.sort();
        let out = serde_json::json!({
            "count": found.len(),
            "elapsed_ms": elapsed.as_millis() as u64,
            "words": sorted,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
    } else {
        println!("Found {} words in {} ms", found.len(), elapsed.as_millis());
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(rows: &[&[&str]]) -> GridFile {
        GridFile {
            layers: rows
                .iter()
                .map(|layer| layer.iter().map(|row| row.chars().collect()).collect())
                .collect(),
        }
    }

    #[test]
    fn well_formed_layers_build_a_grid() {
        let file = layers(&[&["AB", "CD"], &["EF", "GH"]]);
        let grid = grid_from_layers(&file).unwrap();
        assert_eq!(grid.side(), 2);
    }

    #[test]
    fn jagged_layers_are_rejected_even_when_cell_counts_match() {
        // 2 layers, 8 cells total, but rows of 1 and 3 cells.
        let file = layers(&[&["A", "BCD"], &["EF", "GH"]]);
        let err = grid_from_layers(&file).unwrap_err();
        assert!(err.contains("row 0 has 1 cells"), "unexpected error: {err}");

        let file = layers(&[&["AB", "CD", "EF"], &["GH", "IJ"]]);
        let err = grid_from_layers(&file).unwrap_err();
        assert!(err.contains("layer 0 has 3 rows"), "unexpected error: {err}");
    }
}

//! Dictionary scan orchestration.
//!
//! Each word is one independent unit of work: the grid is read-only and the
//! search is synchronous CPU-bound recursion, so words are farmed out to a
//! fixed-size worker pool with no shared mutable state. Every worker folds its
//! findings into a local list and the lists are merged into the final set only
//! after all workers are done.

use std::fmt;

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::grid::Grid;
use crate::search::word_has_path;

#[derive(Debug)]
/// Errors raised when setting up a dictionary scan.
pub enum SolveError {
    /// The worker pool could not be constructed.
    WorkerPool { workers: usize, error: String },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::WorkerPool { workers, error } => {
                write!(f, "failed to build worker pool ({workers} workers): {error}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Scans the dictionary against the grid and returns the set of found words.
///
/// Runs on the global worker pool, sized to the host's available parallelism.
/// Each word is evaluated exactly once, so the merged set cannot contain
/// duplicates even when a word has many valid paths.
pub fn scan(grid: &Grid, words: &[String]) -> FxHashSet<String> {
    tracing::debug!(words = words.len(), side = grid.side(), "scanning dictionary");

    let found: FxHashSet<String> = words
        .par_iter()
        .fold(Vec::new, |mut local, word| {
            if word_has_path(grid, word) {
                local.push(word.clone());
            }
            local
        })
        .reduce(Vec::new, |mut merged, mut local| {
            merged.append(&mut local);
            merged
        })
        .into_iter()
        .collect();

    tracing::debug!(found = found.len(), "scan complete");
    found
}

/// Like [`scan`], but on a dedicated pool of exactly `workers` threads.
///
/// The found set is identical for any worker count; only wall-clock time
/// changes.
pub fn scan_with_workers(
    grid: &Grid,
    words: &[String],
    workers: usize,
) -> Result<FxHashSet<String>, SolveError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SolveError::WorkerPool {
            workers,
            error: e.to_string(),
        })?;

    Ok(pool.install(|| scan(grid, words)))
}

//! Grid solving command
//!
//! Solves one grid and collects the ranked words with summary figures.

use crate::core::{Grid, GridError, ScoredWord, total_score};
use crate::solver::GridSearchEngine;
use std::time::{Duration, Instant};

/// Configuration for solving a grid
pub struct SolveConfig {
    pub grid: String,
    pub parallel: bool,
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(grid: String) -> Self {
        Self {
            grid,
            parallel: false,
            limit: None,
        }
    }
}

/// Result of solving a grid
pub struct SolveResult {
    pub grid: Grid,
    /// Ranked words, truncated to the configured limit
    pub words: Vec<ScoredWord>,
    /// Number of words found before truncation
    pub total_words: usize,
    /// Sum of the scores of every word found
    pub total_score: u32,
    pub duration: Duration,
}

/// Solve the configured grid with the given engine
///
/// # Errors
///
/// Returns an error if the grid is not 16, 25 or 36 characters long.
pub fn solve_grid(
    config: SolveConfig,
    engine: &GridSearchEngine<'_>,
) -> Result<SolveResult, GridError> {
    let grid = Grid::new(&config.grid)?;

    let start = Instant::now();
    let mut words = if config.parallel {
        engine.solve_grid_parallel(&grid)
    } else {
        engine.solve_grid(&grid)
    };
    let duration = start.elapsed();

    let total_words = words.len();
    let total_score = total_score(&words);
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    Ok(SolveResult {
        grid,
        words,
        total_words,
        total_score,
        duration,
    })
}

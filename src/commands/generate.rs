//! Board generation command
//!
//! Rolls a random board from the classic dice and solves it.

use crate::core::dice::roll_board;
use crate::core::{Grid, GridError, ScoredWord, total_score};
use crate::solver::GridSearchEngine;
use rand::Rng;

/// A freshly rolled board with its solutions
pub struct GenerateResult {
    pub grid: Grid,
    pub words: Vec<ScoredWord>,
    pub total_score: u32,
}

/// Roll a `size × size` board and solve it
///
/// # Errors
///
/// Returns an error if `size` is not 4, 5 or 6.
pub fn generate_board<R: Rng + ?Sized>(
    size: usize,
    rng: &mut R,
    engine: &GridSearchEngine<'_>,
) -> Result<GenerateResult, GridError> {
    let grid = roll_board(size, rng)?;
    let words = engine.solve_grid(&grid);
    let total_score = total_score(&words);

    Ok(GenerateResult {
        grid,
        words,
        total_score,
    })
}

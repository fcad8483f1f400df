//! Word check command
//!
//! Decides whether a single word scores on a given grid. A scoring word is in the
//! dictionary and can be traced without reusing a cell.

use crate::core::{Grid, GridError, score};
use crate::dictionary::MIN_WORD_LENGTH;
use crate::solver::GridSearchEngine;

/// Result of checking a word against a grid
pub struct CheckResult {
    pub grid: Grid,
    pub word: String,
    pub in_dictionary: bool,
    /// Cells spelling the word, if it can be traced
    pub path: Option<Vec<(usize, usize)>>,
    /// Points the word earns, zero unless valid
    pub score: u32,
}

impl CheckResult {
    /// Whether the word counts on this grid
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.score > 0
    }
}

/// Check a single word against a grid
///
/// # Errors
///
/// Returns an error if the grid is not 16, 25 or 36 characters long.
pub fn check_word(
    grid: &str,
    word: &str,
    engine: &GridSearchEngine<'_>,
) -> Result<CheckResult, GridError> {
    let grid = Grid::new(grid)?;
    let word = word.trim().to_lowercase();

    let in_dictionary = engine.trie().contains(&word);
    let path = engine.find_path(&grid, &word);
    let valid = word.len() >= MIN_WORD_LENGTH && in_dictionary && path.is_some();

    Ok(CheckResult {
        score: if valid { score(word.len()) } else { 0 },
        grid,
        word,
        in_dictionary,
        path,
    })
}

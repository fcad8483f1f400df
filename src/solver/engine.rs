//! Main Boggle solver interface

use super::search::{WordSearch, trace_word};
use crate::core::{Grid, GridError, ScoredWord, rank_words};
use crate::dictionary::PrefixTrie;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Finds every dictionary word on a Boggle grid
///
/// Borrows a fully built trie and never modifies it, so one engine can solve any
/// number of grids, from any number of threads.
pub struct GridSearchEngine<'a> {
    trie: &'a PrefixTrie,
}

impl<'a> GridSearchEngine<'a> {
    /// Bind an engine to a dictionary
    #[must_use]
    pub const fn new(trie: &'a PrefixTrie) -> Self {
        Self { trie }
    }

    /// The dictionary this engine searches against
    #[must_use]
    pub const fn trie(&self) -> &'a PrefixTrie {
        self.trie
    }

    /// Solve a grid given as a flat string of 16, 25 or 36 letters
    ///
    /// Letters are read row by row and matched case-insensitively. Returns the
    /// words in ranking order: score descending, then length descending, then
    /// alphabetical.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLength` if the grid is not 16, 25 or 36 characters.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::loader::words_from_slice;
    /// use boggle_solver::solver::GridSearchEngine;
    ///
    /// let trie = words_from_slice(&["cat", "cats", "car"]);
    /// let engine = GridSearchEngine::new(&trie);
    ///
    /// let words = engine.solve("CATSxxxxxxxxxxxx").unwrap();
    /// let found: Vec<&str> = words.iter().map(|w| w.word()).collect();
    /// assert_eq!(found, vec!["cats", "cat"]);
    /// ```
    pub fn solve(&self, letters: &str) -> Result<Vec<ScoredWord>, GridError> {
        let grid = Grid::new(letters)?;
        Ok(self.solve_grid(&grid))
    }

    /// Same as [`solve`](Self::solve), running the seed searches on the rayon pool
    ///
    /// # Errors
    /// Returns `GridError::InvalidLength` if the grid is not 16, 25 or 36 characters.
    pub fn solve_parallel(&self, letters: &str) -> Result<Vec<ScoredWord>, GridError> {
        let grid = Grid::new(letters)?;
        Ok(self.solve_grid_parallel(&grid))
    }

    /// Solve an already validated grid
    #[must_use]
    pub fn solve_grid(&self, grid: &Grid) -> Vec<ScoredWord> {
        let mut search = WordSearch::new(grid);
        for (row, col) in grid.positions() {
            search.seed(self.trie.root(), row, col);
        }

        debug!(
            "Searched {}x{} grid: {} cells entered",
            grid.size(),
            grid.size(),
            search.cells_entered()
        );
        rank_words(search.into_found())
    }

    /// Solve an already validated grid using every rayon worker
    ///
    /// Each worker gets its own visited mask and found-word set. The sets are
    /// unioned at the end, so the result is identical to [`solve_grid`](Self::solve_grid).
    #[must_use]
    pub fn solve_grid_parallel(&self, grid: &Grid) -> Vec<ScoredWord> {
        let seeds: Vec<(usize, usize)> = grid.positions().collect();
        let root = self.trie.root();

        let found = seeds
            .par_iter()
            .fold(
                || WordSearch::new(grid),
                |mut search, &(row, col)| {
                    search.seed(root, row, col);
                    search
                },
            )
            .map(WordSearch::into_found)
            .reduce(FxHashSet::default, |mut acc, words| {
                acc.extend(words);
                acc
            });

        debug!(
            "Searched {}x{} grid in parallel: {} distinct words",
            grid.size(),
            grid.size(),
            found.len()
        );
        rank_words(found)
    }

    /// Find one path of distinct, adjacent cells spelling `word`
    ///
    /// Matching is case-insensitive. Returns `None` if the word cannot be traced,
    /// regardless of whether it is in the dictionary.
    #[must_use]
    #[allow(clippy::unused_self)] // Path tracing needs the grid only
    pub fn find_path(&self, grid: &Grid, word: &str) -> Option<Vec<(usize, usize)>> {
        let word = word.to_ascii_lowercase();
        trace_word(grid, word.as_bytes())
    }
}

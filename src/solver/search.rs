//! Backtracking depth-first search over the grid
//!
//! A path is extended one adjacent cell at a time and abandoned as soon as the
//! trie has no continuation for its letters.

use crate::core::Grid;
use crate::dictionary::{PrefixTrie, TrieNode};
use rustc_hash::FxHashSet;

/// Cells on the path currently being extended
///
/// A cell is marked on entry and unmarked on exit, so once a seed search
/// returns the mask is clear again and can be reused for the next seed.
#[derive(Debug, Clone)]
pub(crate) struct VisitedMask {
    size: usize,
    cells: Vec<bool>,
}

impl VisitedMask {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub(crate) fn mark(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] = true;
    }

    #[inline]
    pub(crate) fn unmark(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] = false;
    }

    pub(crate) fn is_clear(&self) -> bool {
        self.cells.iter().all(|&visited| !visited)
    }
}

/// State for one or more seed searches over the same grid
///
/// Seeds run one after another share the mask, the word buffer and the
/// found-word set. Concurrent seeds each need their own `WordSearch`.
pub(crate) struct WordSearch<'g> {
    grid: &'g Grid,
    visited: VisitedMask,
    word: String,
    found: FxHashSet<String>,
    cells_entered: u64,
}

impl<'g> WordSearch<'g> {
    pub(crate) fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            visited: VisitedMask::new(grid.size()),
            word: String::with_capacity(grid.cell_count()),
            found: FxHashSet::default(),
            cells_entered: 0,
        }
    }

    /// Explore every path starting at (row, col)
    pub(crate) fn seed(&mut self, root: &TrieNode, row: usize, col: usize) {
        self.visit(row, col, root);
        debug_assert!(self.visited.is_clear());
        debug_assert!(self.word.is_empty());
    }

    fn visit(&mut self, row: usize, col: usize, node: &TrieNode) {
        if self.visited.is_visited(row, col) {
            return;
        }

        let letter = self.grid.letter_at(row, col);
        let Some(next) = PrefixTrie::step(node, letter) else {
            return;
        };

        self.cells_entered += 1;
        self.word.push(char::from(letter));
        if PrefixTrie::is_word(next) && !self.found.contains(&self.word) {
            self.found.insert(self.word.clone());
        }

        self.visited.mark(row, col);
        for (r, c) in self.grid.neighbors(row, col) {
            self.visit(r, c, next);
        }
        self.visited.unmark(row, col);

        self.word.pop();
    }

    /// Number of cells entered so far across all seeds
    pub(crate) const fn cells_entered(&self) -> u64 {
        self.cells_entered
    }

    pub(crate) fn into_found(self) -> FxHashSet<String> {
        self.found
    }
}

/// Find one non-repeating path of adjacent cells spelling `word`
///
/// Seeds are tried in row-major order and neighbours in the search's fixed
/// direction order, so the same path is returned on every call.
pub(crate) fn trace_word(grid: &Grid, word: &[u8]) -> Option<Vec<(usize, usize)>> {
    if word.is_empty() || word.len() > grid.cell_count() {
        return None;
    }

    let mut visited = VisitedMask::new(grid.size());
    let mut path = Vec::with_capacity(word.len());
    for (row, col) in grid.positions() {
        if extend_path(grid, word, row, col, &mut visited, &mut path) {
            return Some(path);
        }
    }
    None
}

fn extend_path(
    grid: &Grid,
    word: &[u8],
    row: usize,
    col: usize,
    visited: &mut VisitedMask,
    path: &mut Vec<(usize, usize)>,
) -> bool {
    if visited.is_visited(row, col) || grid.letter_at(row, col) != word[path.len()] {
        return false;
    }

    path.push((row, col));
    if path.len() == word.len() {
        return true;
    }

    visited.mark(row, col);
    let complete = grid
        .neighbors(row, col)
        .any(|(r, c)| extend_path(grid, word, r, c, visited, path));
    visited.unmark(row, col);

    if !complete {
        path.pop();
    }
    complete
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_all(grid: &Grid, trie: &PrefixTrie) -> FxHashSet<String> {
        let mut search = WordSearch::new(grid);
        for (row, col) in grid.positions() {
            search.seed(trie.root(), row, col);
        }
        search.into_found()
    }

    #[test]
    fn visited_mask_marks_and_clears() {
        let mut mask = VisitedMask::new(4);
        assert!(mask.is_clear());
        mask.mark(2, 3);
        assert!(mask.is_visited(2, 3));
        assert!(!mask.is_visited(3, 2));
        mask.unmark(2, 3);
        assert!(mask.is_clear());
    }

    #[test]
    fn finds_word_and_its_extension() {
        let grid = Grid::new("catsxxxxxxxxxxxx").unwrap();
        let trie: PrefixTrie = ["cat", "cats", "car"].into_iter().collect();

        let found = search_all(&grid, &trie);
        assert_eq!(found.len(), 2);
        assert!(found.contains("cat"));
        assert!(found.contains("cats"));
    }

    #[test]
    fn does_not_reuse_cells() {
        // Only one 'a' on the board, so "aba" would have to revisit it
        let grid = Grid::new("abxxxxxxxxxxxxxx").unwrap();
        let trie: PrefixTrie = ["aba", "bab"].into_iter().collect();
        assert!(search_all(&grid, &trie).is_empty());
    }

    #[test]
    fn repeated_letters_on_distinct_cells() {
        let grid = Grid::new("aaaxxxxxxxxxxxxx").unwrap();
        let trie: PrefixTrie = ["aaa", "aaaa"].into_iter().collect();
        let found = search_all(&grid, &trie);
        assert!(found.contains("aaa"));
        assert!(!found.contains("aaaa"));
    }

    #[test]
    fn follows_diagonals() {
        // d . . .
        // . o . .
        // . . g .
        let grid = Grid::new("dxxxxoxxxxgxxxxx").unwrap();
        let trie: PrefixTrie = ["dog", "god"].into_iter().collect();
        let found = search_all(&grid, &trie);
        assert!(found.contains("dog"));
        assert!(found.contains("god"));
    }

    #[test]
    fn counts_entered_cells() {
        let grid = Grid::new("catsxxxxxxxxxxxx").unwrap();
        let trie: PrefixTrie = ["cats"].into_iter().collect();
        let mut search = WordSearch::new(&grid);
        search.seed(trie.root(), 0, 0);
        assert_eq!(search.cells_entered(), 4);
    }

    #[test]
    fn trace_word_returns_adjacent_distinct_path() {
        let grid = Grid::new("catsxxxxxxxxxxxx").unwrap();
        let path = trace_word(&grid, b"cats").unwrap();
        assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn trace_word_backtracks_out_of_dead_ends() {
        // t a z z
        // z a z z
        // z z x z
        // z z z z
        let grid = Grid::new("tazzzazzzzxzzzzz").unwrap();
        let path = trace_word(&grid, b"tax").unwrap();
        assert_eq!(path, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn trace_word_missing() {
        let grid = Grid::new("catsxxxxxxxxxxxx").unwrap();
        assert!(trace_word(&grid, b"car").is_none());
        assert!(trace_word(&grid, b"").is_none());
        assert!(trace_word(&grid, b"catc").is_none());
    }
}

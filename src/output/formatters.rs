//! Formatting utilities for terminal output

use crate::core::Grid;

/// Width of the word column in result tables
pub const WORD_COLUMN_WIDTH: usize = 20;

/// Render a grid as uppercase rows of space-separated letters
#[must_use]
pub fn format_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|&letter| char::from(letter.to_ascii_uppercase()).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a grid, replacing every cell off the path with a dot
#[must_use]
pub fn format_grid_path(grid: &Grid, path: &[(usize, usize)]) -> String {
    grid.rows()
        .enumerate()
        .map(|(row, letters)| {
            letters
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    if path.contains(&(row, col)) {
                        char::from(letter.to_ascii_uppercase())
                    } else {
                        '·'
                    }
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a path as `(row,col) → (row,col) → …`
#[must_use]
pub fn format_path(path: &[(usize, usize)]) -> String {
    path.iter()
        .map(|(row, col)| format!("({row},{col})"))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Left-align a word in the word column
#[must_use]
pub fn pad_word(word: &str) -> String {
    format!("{word:<width$}", width = WORD_COLUMN_WIDTH)
}

//! Boggle grid representation
//!
//! A Grid stores a square board of lowercase ASCII letters in row-major order.
//! Characters that are not letters are kept as cells that match no word.

use std::fmt;

/// Side lengths a grid may have (4×4, 5×5 and 6×6)
pub const SUPPORTED_SIZES: [usize; 3] = [4, 5, 6];

/// Stored in place of any non-ASCII character
const BLANK_CELL: u8 = b'?';

/// The 8 neighbour offsets, in the order the search visits them
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square Boggle board
///
/// Letters are normalized to lowercase on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    text: String,
    size: usize,
}

/// Error type for invalid grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid input was not 16, 25 or 36 letters long
    InvalidLength(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Invalid grid length {len}. Expected 16 (4x4), 25 (5x5) or 36 (6x6)"
            ),
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid from a flat, row-major string of letters
    ///
    /// Letters are lowercased. Any other character becomes a cell that no word
    /// passes through; non-ASCII characters are stored as `?`.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLength` if the length is not 16, 25 or 36.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Grid, GridError};
    ///
    /// let grid = Grid::new("CATSxxxxxxxxxxxx").unwrap();
    /// assert_eq!(grid.size(), 4);
    /// assert_eq!(grid.letter_at(0, 1), b'a');
    ///
    /// assert_eq!(Grid::new("abc"), Err(GridError::InvalidLength(3)));
    /// ```
    pub fn new(letters: &str) -> Result<Self, GridError> {
        let length = letters.chars().count();
        let size = match length {
            16 => 4,
            25 => 5,
            36 => 6,
            _ => return Err(GridError::InvalidLength(length)),
        };

        let text: String = letters
            .chars()
            .map(|letter| {
                if letter.is_ascii() {
                    letter.to_ascii_lowercase()
                } else {
                    char::from(BLANK_CELL)
                }
            })
            .collect();

        Ok(Self { text, size })
    }

    /// Side length of the board
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// The letters as a flat lowercase string
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter at (row, col)
    ///
    /// # Panics
    /// Panics if row or col is outside the board
    #[inline]
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.text.as_bytes()[row * self.size + col]
    }

    /// Iterate over the board one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.text.as_bytes().chunks(self.size)
    }

    /// All (row, col) positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// In-bounds neighbours of (row, col), including diagonals
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + use<> {
        let size = self.size;
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < size && c < size).then_some((r, c))
        })
    }

    /// Whether two cells touch horizontally, vertically or diagonally
    #[must_use]
    pub const fn are_adjacent(a: (usize, usize), b: (usize, usize)) -> bool {
        let (ra, ca) = a;
        let (rb, cb) = b;
        ra.abs_diff(rb) <= 1 && ca.abs_diff(cb) <= 1 && !(ra == rb && ca == cb)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

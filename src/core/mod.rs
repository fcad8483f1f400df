//! Core domain types for Boggle
//!
//! Grids, scoring and board generation. Nothing here knows about dictionaries
//! or the search itself.

pub mod dice;
mod grid;
mod score;

pub use grid::{Grid, GridError, SUPPORTED_SIZES};
pub use score::{ScoredWord, rank_words, score, total_score};

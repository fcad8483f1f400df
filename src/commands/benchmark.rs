//! Benchmark command
//!
//! Solves many random boards and reports throughput.

use crate::core::{Grid, GridError};
use crate::core::dice::roll_board;
use crate::solver::GridSearchEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Board with the most words, and its word count
    pub richest_board: Option<(String, usize)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Roll `count` random boards of the given size and solve them all
///
/// Boards are rolled up front from `rng` so a seeded run always solves the same
/// boards, then solved across the rayon pool.
///
/// # Errors
///
/// Returns an error if `size` is not 4, 5 or 6.
pub fn run_benchmark<R: Rng + ?Sized>(
    engine: &GridSearchEngine<'_>,
    count: usize,
    size: usize,
    rng: &mut R,
) -> Result<BenchmarkResult, GridError> {
    let boards = (0..count)
        .map(|_| roll_board(size, rng))
        .collect::<Result<Vec<Grid>, _>>()?;

    let pb = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{size}x{size} boards"));

    let start = Instant::now();
    let counts: Vec<usize> = boards
        .par_iter()
        .map(|grid| {
            let found = engine.solve_grid(grid).len();
            pb.inc(1);
            found
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let total_words: usize = counts.iter().sum();
    let richest_board = counts
        .iter()
        .enumerate()
        .max_by_key(|&(index, &words)| (words, std::cmp::Reverse(index)))
        .map(|(index, &words)| (boards[index].text().to_string(), words));

    Ok(BenchmarkResult {
        total_boards: count,
        total_words,
        average_words: if count == 0 {
            0.0
        } else {
            total_words as f64 / count as f64
        },
        min_words: counts.iter().copied().min().unwrap_or(0),
        max_words: counts.iter().copied().max().unwrap_or(0),
        richest_board,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine_words() -> Vec<&'static str> {
        vec![
            "ate", "eat", "tea", "set", "sit", "its", "tie", "toe", "one", "net", "ten", "not",
            "tin", "ant", "tan", "sea", "out", "nut", "the", "hen", "den", "end", "red", "rod",
        ]
    }

    #[test]
    fn benchmark_counts_all_boards() {
        let trie = words_from_slice(&engine_words());
        let engine = GridSearchEngine::new(&trie);
        let mut rng = StdRng::seed_from_u64(3);

        let result = run_benchmark(&engine, 20, 4, &mut rng).unwrap();

        assert_eq!(result.total_boards, 20);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_words <= result.max_words as f64);
        let (board, words) = result.richest_board.unwrap();
        assert_eq!(board.len(), 16);
        assert_eq!(words, result.max_words);
    }

    #[test]
    fn seeded_benchmarks_agree() {
        let trie = words_from_slice(&engine_words());
        let engine = GridSearchEngine::new(&trie);

        let a = run_benchmark(&engine, 10, 5, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = run_benchmark(&engine, 10, 5, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.total_words, b.total_words);
        assert_eq!(a.richest_board, b.richest_board);
    }

    #[test]
    fn empty_benchmark() {
        let trie = words_from_slice(&engine_words());
        let engine = GridSearchEngine::new(&trie);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run_benchmark(&engine, 0, 4, &mut rng).unwrap();
        assert_eq!(result.total_boards, 0);
        assert_eq!(result.total_words, 0);
        assert!(result.richest_board.is_none());
    }

    #[test]
    fn benchmark_rejects_bad_size() {
        let trie = words_from_slice(&engine_words());
        let engine = GridSearchEngine::new(&trie);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(run_benchmark(&engine, 5, 3, &mut rng).is_err());
    }
}

//! Boggle Solver - CLI
//!
//! Solves Boggle boards against a word list, checks single words and rolls
//! random boards from the classic dice.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{SolveConfig, check_word, generate_board, run_benchmark, solve_grid},
    dictionary::{PrefixTrie, loader::load_from_file},
    output::{
        print_benchmark_result, print_check_result, print_generate_result, print_solve_result,
    },
    solver::GridSearchEngine,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Find every word on a Boggle board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board given as 16, 25 or 36 letters, row by row
    Solve {
        /// The board letters, e.g. abcdefghijklmnop
        grid: String,

        /// Search from all starting cells in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Only print the top N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Check whether a word scores on a board
    Check {
        /// The board letters
        grid: String,

        /// The word to check
        word: String,
    },

    /// Roll a random board from the classic dice and solve it
    Generate {
        /// Board side length: 4, 5 or 6
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        /// Only print the top N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Solve many random boards and report throughput
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Board side length: 4, 5 or 6
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let trie = load_dictionary(&cli.dictionary)?;
    let engine = GridSearchEngine::new(&trie);

    match cli.command {
        Commands::Solve {
            grid,
            parallel,
            limit,
        } => run_solve_command(&engine, grid, parallel, limit),
        Commands::Check { grid, word } => run_check_command(&engine, &grid, &word),
        Commands::Generate { size, seed, limit } => {
            run_generate_command(&engine, size, seed, limit)
        }
        Commands::Benchmark { count, size, seed } => {
            run_benchmark_command(&engine, count, size, seed)
        }
    }
}

fn load_dictionary(path: &Path) -> Result<PrefixTrie> {
    let trie = load_from_file(path)
        .with_context(|| format!("Dictionary not found at {}", path.display()))?;
    if trie.is_empty() {
        log::warn!("Dictionary {} contains no usable words", path.display());
    }
    Ok(trie)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_solve_command(
    engine: &GridSearchEngine<'_>,
    grid: String,
    parallel: bool,
    limit: Option<usize>,
) -> Result<()> {
    let mut config = SolveConfig::new(grid);
    config.parallel = parallel;
    config.limit = limit;

    let result = solve_grid(config, engine)?;
    print_solve_result(&result);
    Ok(())
}

fn run_check_command(engine: &GridSearchEngine<'_>, grid: &str, word: &str) -> Result<()> {
    let result = check_word(grid, word, engine)?;
    print_check_result(&result);
    Ok(())
}

fn run_generate_command(
    engine: &GridSearchEngine<'_>,
    size: usize,
    seed: Option<u64>,
    limit: Option<usize>,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let result = generate_board(size, &mut rng, engine)?;
    print_generate_result(&result, limit);
    Ok(())
}

fn run_benchmark_command(
    engine: &GridSearchEngine<'_>,
    count: usize,
    size: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!("Running benchmark on {count} random {size}x{size} boards...");

    let mut rng = make_rng(seed);
    let result = run_benchmark(engine, count, size, &mut rng)?;
    print_benchmark_result(&result);
    Ok(())
}

//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_word};
pub use generate::{GenerateResult, generate_board};
pub use solve::{SolveConfig, SolveResult, solve_grid};

//! Display functions for command results

use super::formatters::{format_grid, format_grid_path, format_path, pad_word};
use crate::commands::{BenchmarkResult, CheckResult, GenerateResult, SolveResult};
use crate::core::ScoredWord;
use colored::Colorize;

/// Print a ranked word list as a `Word | Score` table
fn print_word_table(words: &[ScoredWord]) {
    println!("{} {}", pad_word("Word").bold(), "Score".bold());
    println!("{}", "-".repeat(30));
    for word in words {
        println!("{} {}", pad_word(word.word()), word.score().to_string().red());
    }
}

/// Print the result of solving a grid
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}\n", format_grid(&result.grid).bright_yellow().bold());
    println!("Found {} solutions", result.total_words);
    println!("Sort results by: score");
    print_word_table(&result.words);

    if result.words.len() < result.total_words {
        println!(
            "{}",
            format!("… {} more", result.total_words - result.words.len()).bright_black()
        );
    }

    println!(
        "\nTotal score: {}   ({:.2}ms)",
        result.total_score.to_string().green().bold(),
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print the result of checking one word
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.to_uppercase();
    if result.is_valid() {
        println!(
            "{}",
            format!("✅ {word} scores {}", result.score).green().bold()
        );
    } else {
        println!("{}", format!("❌ {word} does not score").red().bold());
    }

    println!(
        "   In dictionary: {}",
        if result.in_dictionary { "yes" } else { "no" }
    );
    match &result.path {
        Some(path) => {
            println!("   Path:          {}", format_path(path));
            println!("\n{}", format_grid_path(&result.grid, path).cyan());
        }
        None => println!("   Path:          not on the board"),
    }
}

/// Print a generated board with its solutions
pub fn print_generate_result(result: &GenerateResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(30).cyan());
    println!("{}", format_grid(&result.grid).bright_yellow().bold());
    println!("{}", "═".repeat(30).cyan());
    println!("Board: {}", result.grid.text().to_uppercase());
    println!(
        "\nFound {} solutions worth {} points",
        result.words.len(),
        result.total_score.to_string().green().bold()
    );

    let shown = limit.map_or(result.words.len(), |n| n.min(result.words.len()));
    print_word_table(&result.words[..shown]);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        result.min_words.to_string().yellow()
    );
    println!(
        "   Most words:       {}",
        result.max_words.to_string().green()
    );
    println!("   Total words:      {}", result.total_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if let Some((board, words)) = &result.richest_board {
        println!(
            "\n🏆 Richest board: {} ({words} words)",
            board.to_uppercase().bright_yellow()
        );
    }
}

//! Boggle Solver
//!
//! Finds every dictionary word that can be traced through adjacent cells of a
//! 4×4, 5×5 or 6×6 Boggle grid, then scores and ranks them.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::dictionary::loader::words_from_slice;
//! use boggle_solver::solver::GridSearchEngine;
//!
//! let trie = words_from_slice(&["cat", "cats", "car"]);
//! let engine = GridSearchEngine::new(&trie);
//!
//! for word in engine.solve("catsxxxxxxxxxxxx").unwrap() {
//!     println!("{} {}", word.word(), word.score());
//! }
//! ```

// Core domain types
pub mod core;

// Prefix trie and word list loading
pub mod dictionary;

// Grid search
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

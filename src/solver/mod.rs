//! Boggle word search
//!
//! Exhaustive backtracking over every starting cell, pruned against the dictionary trie.

mod engine;
mod search;

pub use engine::GridSearchEngine;

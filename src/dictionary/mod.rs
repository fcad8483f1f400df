//! Dictionary storage for Boggle solving
//!
//! Words live in a prefix trie so the search can abandon a path as soon as its
//! letters stop forming the start of any word.

pub mod loader;
mod trie;

pub use loader::MIN_WORD_LENGTH;
pub use trie::{PrefixTrie, TrieNode};

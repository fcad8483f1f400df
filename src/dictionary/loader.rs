//! Dictionary loading utilities
//!
//! Builds a `PrefixTrie` from a word list file or an in-memory slice.

use super::PrefixTrie;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// Shortest word that counts in Boggle
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize one dictionary entry
///
/// Trims and lowercases the entry. Returns `None` for entries shorter than
/// `MIN_WORD_LENGTH` or containing anything but ASCII letters.
#[must_use]
pub fn normalize_entry(entry: &str) -> Option<String> {
    let word = entry.trim().to_lowercase();
    (word.len() >= MIN_WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())).then_some(word)
}

/// Build a trie from newline-separated dictionary text
#[must_use]
pub fn trie_from_text(content: &str) -> PrefixTrie {
    let mut skipped = 0usize;
    let trie: PrefixTrie = content
        .lines()
        .filter_map(|line| {
            let word = normalize_entry(line);
            if word.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            word
        })
        .collect();

    debug!("Skipped {skipped} dictionary entries");
    trie
}

/// Load a dictionary file into a trie
///
/// One word per line. Blank lines, short words and entries with non-letter
/// characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_solver::dictionary::loader::load_from_file;
///
/// let trie = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", trie.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<PrefixTrie> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let trie = trie_from_text(&content);

    info!("Loaded {} words from {}", trie.len(), path.display());
    Ok(trie)
}

/// Build a trie from an in-memory word list, applying the same filtering as files
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::loader::words_from_slice;
///
/// let trie = words_from_slice(&["Cat", "at", "dog"]);
/// assert_eq!(trie.len(), 2);
/// assert!(trie.contains("cat"));
/// assert!(!trie.contains("at"));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> PrefixTrie {
    slice.iter().filter_map(|&s| normalize_entry(s)).collect()
}

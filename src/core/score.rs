//! Word scoring and result ranking
//!
//! Scores depend on word length only and follow the standard Boggle table.

use std::cmp::Ordering;
use std::fmt;

/// Score awarded for a word of the given length
///
/// | length | score |
/// |--------|-------|
/// | < 3    | 0     |
/// | 3–4    | 1     |
/// | 5      | 2     |
/// | 6      | 3     |
/// | 7      | 5     |
/// | ≥ 8    | 11    |
#[inline]
#[must_use]
pub const fn score(length: usize) -> u32 {
    match length {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// A found word together with its score
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoredWord {
    word: String,
    score: u32,
}

impl ScoredWord {
    /// Score a word by its length
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let score = score(word.len());
        Self { word, score }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Ranking order: score descending, then length descending, then alphabetical
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.word.len().cmp(&self.word.len()))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

/// Score every word and sort the result into ranking order
///
/// # Examples
/// ```
/// use boggle_solver::core::rank_words;
///
/// let ranked = rank_words(["cat", "stone", "cats", "act"]);
/// let words: Vec<&str> = ranked.iter().map(|w| w.word()).collect();
/// assert_eq!(words, vec!["stone", "cats", "act", "cat"]);
/// ```
#[must_use]
pub fn rank_words<I, S>(words: I) -> Vec<ScoredWord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut scored: Vec<ScoredWord> = words.into_iter().map(ScoredWord::new).collect();
    scored.sort_unstable_by(ScoredWord::rank_cmp);
    scored
}

/// Sum of all scores in a result list
#[must_use]
pub fn total_score(words: &[ScoredWord]) -> u32 {
    words.iter().map(ScoredWord::score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table_boundaries() {
        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 1),
            (4, 1),
            (5, 2),
            (6, 3),
            (7, 5),
            (8, 11),
            (9, 11),
            (16, 11),
        ];
        for (length, points) in expected {
            assert_eq!(score(length), points, "length {length}");
        }
    }

    #[test]
    fn scored_word_uses_length() {
        let word = ScoredWord::new("stones");
        assert_eq!(word.word(), "stones");
        assert_eq!(word.score(), 3);
    }

    #[test]
    fn ranking_score_first() {
        let ranked = rank_words(["abcd", "abcdefgh", "abcde"]);
        let scores: Vec<u32> = ranked.iter().map(ScoredWord::score).collect();
        assert_eq!(scores, vec![11, 2, 1]);
    }

    #[test]
    fn ranking_length_breaks_score_ties() {
        // Both score 1, the longer word comes first
        let ranked = rank_words(["cat", "cats"]);
        assert_eq!(ranked[0].word(), "cats");
        assert_eq!(ranked[1].word(), "cat");
    }

    #[test]
    fn ranking_alphabetical_breaks_length_ties() {
        let ranked = rank_words(["tac", "act", "cat"]);
        let words: Vec<&str> = ranked.iter().map(ScoredWord::word).collect();
        assert_eq!(words, vec!["act", "cat", "tac"]);
    }

    #[test]
    fn ranking_is_independent_of_input_order() {
        let a = rank_words(["stone", "tones", "note", "notes", "onset", "tone"]);
        let b = rank_words(["tone", "onset", "notes", "note", "tones", "stone"]);
        assert_eq!(a, b);
    }

    #[test]
    fn total_score_sums() {
        let ranked = rank_words(["cat", "stone", "eighteen"]);
        assert_eq!(total_score(&ranked), 1 + 2 + 11);
        assert_eq!(total_score(&[]), 0);
    }

    #[test]
    fn scored_word_display() {
        assert_eq!(format!("{}", ScoredWord::new("stone")), "stone (2)");
    }
}

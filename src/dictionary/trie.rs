//! Prefix trie over lowercase ASCII words
//!
//! Each node owns its children through a fixed 26-slot table, so stepping from a
//! node to the child for a letter is a single index.

const ALPHABET_SIZE: usize = 26;

/// A node in the prefix trie
///
/// Represents exactly one prefix. The root represents the empty prefix.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
}

impl TrieNode {
    /// Child node for a lowercase letter, if any inserted word continues with it
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&Self> {
        slot(letter).and_then(|index| self.children[index].as_deref())
    }

    /// Whether the prefix ending at this node is a complete word
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[inline]
fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// Dictionary of words stored as a prefix trie
///
/// Built once, then only read. Shared references may be used from any number of
/// threads at once.
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::PrefixTrie;
///
/// let trie: PrefixTrie = ["cat", "cats"].into_iter().collect();
/// let c = PrefixTrie::step(trie.root(), b'c').unwrap();
/// let ca = PrefixTrie::step(c, b'a').unwrap();
/// let cat = PrefixTrie::step(ca, b't').unwrap();
///
/// assert!(!PrefixTrie::is_word(ca));
/// assert!(PrefixTrie::is_word(cat));
/// assert!(PrefixTrie::step(cat, b'z').is_none());
/// ```
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    word_count: usize,
}

impl PrefixTrie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating intermediate nodes as needed
    ///
    /// Re-inserting an existing word is a no-op. Returns `false` without touching
    /// the trie if the word is empty or has characters outside `a..=z`.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }

        let mut node = &mut self.root;
        for letter in word.bytes() {
            let index = usize::from(letter - b'a');
            node = node.children[index]
                .get_or_insert_with(Box::default)
                .as_mut();
        }

        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
        true
    }

    /// The node for the empty prefix
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Step from `node` along `letter`
    ///
    /// Returns `None` if no inserted word continues this prefix with `letter`.
    #[inline]
    #[must_use]
    pub fn step(node: &TrieNode, letter: u8) -> Option<&TrieNode> {
        node.child(letter)
    }

    /// Whether `node` ends a complete word
    #[inline]
    #[must_use]
    pub const fn is_word(node: &TrieNode) -> bool {
        node.is_terminal()
    }

    /// Whether `word` was inserted as a complete word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        word.bytes()
            .try_fold(&self.root, |node, letter| node.child(letter))
            .is_some_and(TrieNode::is_terminal)
    }

    /// Whether any inserted word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        prefix
            .bytes()
            .try_fold(&self.root, |node, letter| node.child(letter))
            .is_some()
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<'a>(trie: &'a PrefixTrie, prefix: &str) -> Option<&'a TrieNode> {
        prefix
            .bytes()
            .try_fold(trie.root(), |node, letter| PrefixTrie::step(node, letter))
    }

    #[test]
    fn empty_trie() {
        let trie = PrefixTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(PrefixTrie::step(trie.root(), b'a').is_none());
        assert!(!PrefixTrie::is_word(trie.root()));
    }

    #[test]
    fn insert_marks_terminal_only_at_end() {
        let mut trie = PrefixTrie::new();
        assert!(trie.insert("cats"));

        assert!(!PrefixTrie::is_word(walk(&trie, "c").unwrap()));
        assert!(!PrefixTrie::is_word(walk(&trie, "cat").unwrap()));
        assert!(PrefixTrie::is_word(walk(&trie, "cats").unwrap()));
        assert!(walk(&trie, "catsx").is_none());
    }

    #[test]
    fn prefix_and_word_coexist() {
        let trie: PrefixTrie = ["cats", "cat"].into_iter().collect();
        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert!(!trie.contains("ca"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = PrefixTrie::new();
        assert!(trie.insert("stone"));
        assert!(trie.insert("stone"));
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("stone"));
    }

    #[test]
    fn rejects_non_lowercase_words() {
        let mut trie = PrefixTrie::new();
        assert!(!trie.insert(""));
        assert!(!trie.insert("Cat"));
        assert!(!trie.insert("it's"));
        assert!(!trie.insert("café"));
        assert!(trie.is_empty());
        assert!(PrefixTrie::step(trie.root(), b'c').is_none());
    }

    #[test]
    fn step_rejects_non_letters() {
        let trie: PrefixTrie = ["abc"].into_iter().collect();
        assert!(PrefixTrie::step(trie.root(), b'A').is_none());
        assert!(PrefixTrie::step(trie.root(), b'{').is_none());
        assert!(PrefixTrie::step(trie.root(), b'`').is_none());
    }

    #[test]
    fn has_prefix() {
        let trie: PrefixTrie = ["zebra"].into_iter().collect();
        assert!(trie.has_prefix(""));
        assert!(trie.has_prefix("zeb"));
        assert!(trie.has_prefix("zebra"));
        assert!(!trie.has_prefix("zebras"));
        assert!(!trie.has_prefix("a"));
    }

    #[test]
    fn siblings_share_prefix_nodes() {
        let trie: PrefixTrie = ["tea", "ten", "to"].into_iter().collect();
        let t = walk(&trie, "t").unwrap();
        assert!(PrefixTrie::step(t, b'e').is_some());
        assert!(PrefixTrie::step(t, b'o').is_some());
        assert!(PrefixTrie::step(t, b'a').is_none());
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn extend_adds_words() {
        let mut trie = PrefixTrie::new();
        trie.extend(vec![String::from("alpha"), String::from("beta")]);
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("beta"));
    }
}

//! Dictionary: the indexed word list every search runs against
//!
//! Built once from raw text, immutable afterwards, and safe to share
//! read-only across arbitrarily many callers (wrap in `Arc` to share).

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::WordEntry;
use std::collections::BTreeSet;

/// An immutable, deduplicated, lexicographically sorted word list
///
/// The sort order is part of the contract: the word-of-the-day selector
/// indexes into it, so it must be reproducible across runs.
///
/// # Examples
/// ```
/// use anagram_odyssey::dictionary::Dictionary;
///
/// let dict = Dictionary::build("listen SILENT enlist listen 3rd-rate");
/// assert_eq!(dict.len(), 3);
/// assert!(dict.contains("silent"));
/// assert!(!dict.contains("3rd-rate"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
}

impl Dictionary {
    /// Build a dictionary from raw text
    ///
    /// Splits on whitespace and newlines, lowercases, drops tokens that are
    /// empty or contain anything outside `a-z`, and deduplicates. Total over
    /// arbitrary input; an empty or all-invalid input yields an empty
    /// dictionary.
    #[must_use]
    pub fn build(raw_text: &str) -> Self {
        let unique: BTreeSet<String> = raw_text
            .split_whitespace()
            .filter_map(|token| WordEntry::new(token).ok())
            .map(|entry| entry.text().to_string())
            .collect();

        Self::from_sorted_unique(unique)
    }

    /// Build a dictionary from a pre-tokenized word list
    ///
    /// Invalid entries are skipped, duplicates collapsed.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = words
            .into_iter()
            .filter_map(|token| WordEntry::new(token.as_ref()).ok())
            .map(|entry| entry.text().to_string())
            .collect();

        Self::from_sorted_unique(unique)
    }

    // BTreeSet iteration is already sorted and unique; entries inherit both.
    fn from_sorted_unique(unique: BTreeSet<String>) -> Self {
        let entries = unique
            .into_iter()
            .filter_map(|word| WordEntry::new(word).ok())
            .collect();

        Self { entries }
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership test (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.entries
            .binary_search_by(|entry| entry.text().cmp(word.as_str()))
            .is_ok()
    }

    /// The sorted entries with their precomputed letter counts
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// The word at a given index in the stable sort order
    #[must_use]
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(WordEntry::text)
    }

    /// Iterate over all words in sorted order
    pub fn words(&self) -> impl Iterator<Item = &str> + Clone {
        self.entries.iter().map(WordEntry::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_normalizes_and_dedupes() {
        let dict = Dictionary::build("cat\nDOG cat\tbird\ncat");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("bird"));
    }

    #[test]
    fn build_drops_invalid_tokens() {
        let dict = Dictionary::build("good b4d it's fine  -- ");
        let words: Vec<&str> = dict.words().collect();
        assert_eq!(words, vec!["fine", "good"]);
    }

    #[test]
    fn build_empty_input() {
        let dict = Dictionary::build("");
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert!(!dict.contains("anything"));
    }

    #[test]
    fn entries_are_sorted() {
        let dict = Dictionary::build("zebra apple mango");
        let words: Vec<&str> = dict.words().collect();
        assert_eq!(words, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = Dictionary::build("listen");
        assert!(dict.contains("LISTEN"));
        assert!(dict.contains("Listen"));
        assert!(!dict.contains("silent"));
    }

    #[test]
    fn word_at_follows_sort_order() {
        let dict = Dictionary::build("cherry apple banana");
        assert_eq!(dict.word_at(0), Some("apple"));
        assert_eq!(dict.word_at(1), Some("banana"));
        assert_eq!(dict.word_at(2), Some("cherry"));
        assert_eq!(dict.word_at(3), None);
    }

    #[test]
    fn from_words_matches_build() {
        let from_text = Dictionary::build("tin list silent");
        let from_words = Dictionary::from_words(["tin", "list", "silent"]);
        let a: Vec<&str> = from_text.words().collect();
        let b: Vec<&str> = from_words.words().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn embedded_words_build_cleanly() {
        let dict = Dictionary::from_words(WORDS);
        assert_eq!(dict.len(), WORDS_COUNT);
        assert!(dict.contains("listen"));
        assert!(dict.contains("puzzle"));
    }
}

//! Bounded search history
//!
//! A fixed-capacity, recency-ordered log of searched words. Owned by exactly
//! one session; the serde derives exist so a host may serialize it, not so
//! the log persists itself.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of entries kept
pub const DEFAULT_CAPACITY: usize = 15;

/// A fixed-capacity, most-recent-first log of searched words
///
/// # Examples
/// ```
/// use anagram_odyssey::session::HistoryLog;
///
/// let mut history = HistoryLog::new(2);
/// history.add("a");
/// history.add("b");
/// history.add("c"); // Evicts "a"
/// assert_eq!(history.get_all(), vec!["c", "b"]);
///
/// history.add("b"); // Move to front, no growth
/// assert_eq!(history.get_all(), vec!["b", "c"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryLog {
    words: VecDeque<String>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryLog {
    /// Create a log with a fixed capacity
    ///
    /// The capacity never changes afterwards; a capacity of 0 is coerced
    /// to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a search
    ///
    /// An already-present word moves to the front without changing the size;
    /// a new word is inserted at the front, evicting the oldest entry if the
    /// log is full.
    pub fn add(&mut self, word: impl Into<String>) {
        let word = word.into();

        if self.words.contains(&word) {
            self.words.retain(|w| w != &word);
        }
        self.words.push_front(word);

        if self.words.len() > self.capacity {
            self.words.pop_back();
        }
    }

    /// All recorded words, most recent first
    #[must_use]
    pub fn get_all(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// True if the word has been recorded
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of recorded words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The fixed capacity set at construction
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut history = HistoryLog::default();
        history.add("first");
        history.add("second");
        history.add("third");
        assert_eq!(history.get_all(), vec!["third", "second", "first"]);
    }

    #[test]
    fn capacity_two_eviction() {
        let mut history = HistoryLog::new(2);
        history.add("a");
        history.add("b");
        history.add("c");
        assert_eq!(history.get_all(), vec!["c", "b"]);
    }

    #[test]
    fn re_add_moves_to_front_without_growth() {
        let mut history = HistoryLog::new(2);
        history.add("a");
        history.add("b");
        history.add("c");
        history.add("b");
        assert_eq!(history.get_all(), vec!["b", "c"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn no_duplicates() {
        let mut history = HistoryLog::default();
        history.add("word");
        history.add("word");
        history.add("word");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn capacity_never_exceeded() {
        let mut history = HistoryLog::new(3);
        for i in 0..10 {
            history.add(format!("word{i}"));
            assert!(history.len() <= 3);
        }
        assert_eq!(history.get_all(), vec!["word9", "word8", "word7"]);
    }

    #[test]
    fn zero_capacity_coerced() {
        let mut history = HistoryLog::new(0);
        history.add("only");
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.get_all(), vec!["only"]);
    }

    #[test]
    fn default_capacity() {
        assert_eq!(HistoryLog::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn clear_empties_log() {
        let mut history = HistoryLog::default();
        history.add("word");
        history.clear();
        assert!(history.is_empty());
        assert!(!history.contains("word"));
    }

    #[test]
    fn serde_round_trip() {
        let mut history = HistoryLog::new(5);
        history.add("one");
        history.add("two");

        let json = serde_json::to_string(&history).unwrap();
        let restored: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.get_all(), history.get_all());
        assert_eq!(restored.capacity(), 5);
    }
}

//! Starred words with creation timestamps
//!
//! Set semantics keyed by word: at most one entry per word, timestamp fixed
//! at creation. Session-scoped; serde derives are for hosts that choose to
//! persist.

use chrono::Utc;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A session's favorited words, each with its creation timestamp
/// (milliseconds since the Unix epoch, UTC)
///
/// # Examples
/// ```
/// use anagram_odyssey::session::Favorites;
///
/// let mut favorites = Favorites::new();
/// favorites.add("cat");
/// favorites.add("cat"); // No-op
/// assert_eq!(favorites.len(), 1);
///
/// favorites.remove("cat");
/// assert!(!favorites.contains("cat"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Favorites {
    words: FxHashMap<String, i64>,
}

impl Favorites {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Star a word
    ///
    /// A no-op when the word is already present: the original timestamp is
    /// kept. Returns true if the word was newly added.
    pub fn add(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.words.contains_key(&word) {
            return false;
        }
        self.words.insert(word, Utc::now().timestamp_millis());
        true
    }

    /// Unstar a word; returns true if it was present
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word).is_some()
    }

    /// True if the word is starred
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Star if absent, unstar if present; returns true if now starred
    pub fn toggle(&mut self, word: &str) -> bool {
        if self.contains(word) {
            self.remove(word);
            false
        } else {
            self.add(word);
            true
        }
    }

    /// All starred words with timestamps, newest first
    ///
    /// Equal timestamps tie-break alphabetically so the order is total.
    #[must_use]
    pub fn get_all(&self) -> Vec<(String, i64)> {
        let mut entries: Vec<(String, i64)> = self
            .words
            .iter()
            .map(|(word, &ts)| (word.clone(), ts))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Number of starred words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if nothing is starred
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Unstar everything
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

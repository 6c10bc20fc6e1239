//! Dictionary word entry
//!
//! A `WordEntry` stores a validated lowercase word along with its precomputed
//! letter counts, so the per-word count map is built once at dictionary
//! construction instead of once per search.

use super::letter_bag::ALPHABET_LEN;
use std::fmt;

/// A dictionary word with precomputed letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    text: String,
    counts: [u8; ALPHABET_LEN],
}

/// Error type for invalid dictionary words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEntryError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters a-z"),
        }
    }
}

impl std::error::Error for WordEntryError {}

impl WordEntry {
    /// Create a new entry from a string
    ///
    /// # Errors
    /// Returns `WordEntryError` if the word is empty or contains anything
    /// outside `a-z` after lowercasing.
    ///
    /// # Examples
    /// ```
    /// use anagram_odyssey::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Silent").unwrap();
    /// assert_eq!(entry.text(), "silent");
    ///
    /// assert!(WordEntry::new("").is_err());
    /// assert!(WordEntry::new("don't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordEntryError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordEntryError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordEntryError::InvalidCharacters);
        }

        let mut counts = [0u8; ALPHABET_LEN];
        for b in text.bytes() {
            counts[(b - b'a') as usize] = counts[(b - b'a') as usize].saturating_add(1);
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True for the impossible empty entry; construction rejects it
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Precomputed per-letter counts, indexed `a..=z`
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u8; ALPHABET_LEN] {
        &self.counts
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

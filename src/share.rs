//! Shareable search summary
//!
//! A pure transformation of one search into an exportable structure. The
//! host decides what to do with it (clipboard, share sheet, JSON); rendering
//! beyond plain text is out of core scope.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Structured summary of a search for export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareableContent {
    pub original_input: String,
    pub anagrams: Vec<String>,
    pub word_of_the_day: String,
}

/// Assemble shareable content from a finished search
///
/// Pure; no clipboard or share-sheet side effects.
///
/// # Examples
/// ```
/// use anagram_odyssey::share::generate_shareable_content;
///
/// let words = vec!["silent".to_string(), "enlist".to_string()];
/// let content = generate_shareable_content("listen", &words, "puzzle");
/// assert_eq!(content.original_input, "listen");
/// assert_eq!(content.anagrams.len(), 2);
/// assert_eq!(content.word_of_the_day, "puzzle");
/// ```
#[must_use]
pub fn generate_shareable_content(
    input: &str,
    anagrams: &[String],
    word_of_the_day: &str,
) -> ShareableContent {
    ShareableContent {
        original_input: input.to_string(),
        anagrams: anagrams.to_vec(),
        word_of_the_day: word_of_the_day.to_string(),
    }
}

impl ShareableContent {
    /// Render as plain text for clipboard-style hosts
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Anagram Odyssey Results");
        let _ = writeln!(text, "Letters: {}", self.original_input);
        let _ = writeln!(text, "Found {} words:", self.anagrams.len());
        let _ = writeln!(text, "{}", self.anagrams.join(", "));
        let _ = write!(text, "Word of the day: {}", self.word_of_the_day);
        text
    }
}

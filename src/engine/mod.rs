//! Search engine facade
//!
//! Ties the letter bag, matcher, and sorter together behind a typed error
//! boundary so callers can tell "no matches" apart from "not ready".

pub mod grouping;
pub mod matcher;

pub use grouping::{LengthGroup, SortCriteria, group_by_length, sort_words};
pub use matcher::find_anagrams;

use crate::core::LetterBag;
use crate::dictionary::Dictionary;
use std::fmt;
use std::sync::Arc;

/// Default minimum word length, matching the UI's editable default
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default cap on displayed results
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Error type for engine calls
///
/// Every variant is a local, recoverable condition; none is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A search was attempted before any dictionary was supplied
    DictionaryUnavailable,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionaryUnavailable => {
                write!(f, "No dictionary loaded; supply one before searching")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Tunable search parameters
///
/// Both numeric fields are user-editable UI state; values below 1 are
/// coerced to 1 instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub min_length: usize,
    pub max_results: usize,
    pub sort: SortCriteria,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_results: DEFAULT_MAX_RESULTS,
            sort: SortCriteria::Alphabetical,
        }
    }
}

impl SearchOptions {
    /// Coerce out-of-range values to the sane minimum
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            min_length: self.min_length.max(1),
            max_results: self.max_results.max(1),
            sort: self.sort,
        }
    }
}

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Matches after sorting and truncation to `max_results`
    pub matches: Vec<String>,
    /// The query after normalization (lowercase letters only)
    pub normalized_input: String,
    /// Match count before truncation
    pub total_matches: usize,
}

/// The word-engine: an immutable shared dictionary behind a search API
///
/// The dictionary is loaded once and shared read-only; per-session state
/// (history, favorites) lives outside the engine.
///
/// # Examples
/// ```
/// use anagram_odyssey::dictionary::Dictionary;
/// use anagram_odyssey::engine::{Engine, SearchOptions};
/// use std::sync::Arc;
///
/// let dict = Arc::new(Dictionary::build("silent enlist tin list"));
/// let engine = Engine::with_dictionary(dict);
///
/// let result = engine.search("listen", &SearchOptions::default()).unwrap();
/// assert_eq!(result.matches, vec!["enlist", "list", "silent"]);
/// assert_eq!(result.normalized_input, "listen");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    dictionary: Option<Arc<Dictionary>>,
}

impl Engine {
    /// Create an engine with no dictionary yet
    ///
    /// Searches fail with `EngineError::DictionaryUnavailable` until one is
    /// supplied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine around a shared dictionary
    #[must_use]
    pub fn with_dictionary(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary: Some(dictionary),
        }
    }

    /// Supply or replace the dictionary
    pub fn set_dictionary(&mut self, dictionary: Arc<Dictionary>) {
        self.dictionary = Some(dictionary);
    }

    /// The shared dictionary, if one has been supplied
    #[must_use]
    pub fn dictionary(&self) -> Option<&Arc<Dictionary>> {
        self.dictionary.as_ref()
    }

    /// Run an anagram search
    ///
    /// The pipeline is: normalize input into a bag, scan the dictionary,
    /// sort by the active criterion, truncate to `max_results`. Truncation
    /// preserves the sorted order; grouping for display is a separate stage
    /// (`group_by_length`). An input that normalizes to an empty bag returns
    /// an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DictionaryUnavailable` if no dictionary has
    /// been supplied.
    pub fn search(&self, input: &str, options: &SearchOptions) -> Result<SearchResult, EngineError> {
        let dictionary = self
            .dictionary
            .as_ref()
            .ok_or(EngineError::DictionaryUnavailable)?;

        let options = options.normalized();
        let bag = LetterBag::from_input(input);

        let mut matches: Vec<String> = find_anagrams(&bag, dictionary, options.min_length)
            .into_iter()
            .map(ToString::to_string)
            .collect();

        sort_words(&mut matches, options.sort);

        let total_matches = matches.len();
        matches.truncate(options.max_results);

        Ok(SearchResult {
            matches,
            normalized_input: bag.normalized().to_string(),
            total_matches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(words: &str) -> Engine {
        Engine::with_dictionary(Arc::new(Dictionary::build(words)))
    }

    #[test]
    fn search_without_dictionary_fails_fast() {
        let engine = Engine::new();
        let result = engine.search("listen", &SearchOptions::default());
        assert_eq!(result.unwrap_err(), EngineError::DictionaryUnavailable);
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let engine = engine_with("zebra");
        let result = engine.search("listen", &SearchOptions::default()).unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.total_matches, 0);
    }

    #[test]
    fn empty_bag_is_not_an_error() {
        let engine = engine_with("listen silent");
        let result = engine.search("1234 !?", &SearchOptions::default()).unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.normalized_input, "");
    }

    #[test]
    fn out_of_range_options_coerced() {
        let engine = engine_with("tin in it i");
        let options = SearchOptions {
            min_length: 0,
            max_results: 0,
            sort: SortCriteria::Alphabetical,
        };

        // min_length 0 behaves as 1; max_results 0 behaves as 1
        let result = engine.search("tin", &options).unwrap();
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.total_matches, 4);
    }

    #[test]
    fn truncation_happens_after_sorting() {
        let engine = engine_with("ant tan nat ata");
        let options = SearchOptions {
            min_length: 1,
            max_results: 2,
            sort: SortCriteria::Alphabetical,
        };

        let result = engine.search("tan", &options).unwrap();
        // Alphabetical order first, then cap: "ant", "nat" survive
        assert_eq!(result.matches, vec!["ant", "nat"]);
        assert_eq!(result.total_matches, 3);
    }

    #[test]
    fn normalized_input_reported() {
        let engine = engine_with("listen");
        let result = engine
            .search(" LiS-TeN! ", &SearchOptions::default())
            .unwrap();
        assert_eq!(result.normalized_input, "listen");
        assert_eq!(result.matches, vec!["listen"]);
    }

    #[test]
    fn query_word_matches_itself() {
        let engine = engine_with("listen silent");
        let result = engine.search("listen", &SearchOptions::default()).unwrap();
        assert!(result.matches.contains(&"listen".to_string()));
    }
}

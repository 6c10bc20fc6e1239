//! Result ordering and length grouping
//!
//! Sorting and grouping are separate stages: matches are sorted by the
//! active criterion, truncated by the caller, and only then bucketed by
//! length for display.

use crate::analysis::scrabble_score;
use std::collections::BTreeMap;

/// Ordering applied to matched words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriteria {
    /// Case-insensitive lexicographic order (the default)
    #[default]
    Alphabetical,
    /// Longest words first
    Length,
    /// Highest Scrabble score first
    Score,
}

impl SortCriteria {
    /// Create a criterion from a name string
    ///
    /// Supported names: "alphabetical", "length", "score".
    /// Defaults to alphabetical if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "length" => Self::Length,
            "score" => Self::Score,
            _ => Self::Alphabetical,
        }
    }

    /// Canonical name of the criterion
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::Length => "length",
            Self::Score => "score",
        }
    }
}

/// Sort words in place by the given criterion
///
/// Every ordering is total and stable; length and score orderings break ties
/// alphabetically so output never depends on input order.
///
/// # Examples
/// ```
/// use anagram_odyssey::engine::{SortCriteria, sort_words};
///
/// let mut words = vec!["tans".to_string(), "cat".to_string(), "ants".to_string()];
/// sort_words(&mut words, SortCriteria::Alphabetical);
/// assert_eq!(words, vec!["ants", "cat", "tans"]);
/// ```
pub fn sort_words(words: &mut [String], criterion: SortCriteria) {
    match criterion {
        SortCriteria::Alphabetical => {
            words.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        }
        SortCriteria::Length => {
            words.sort_by(|a, b| {
                b.chars()
                    .count()
                    .cmp(&a.chars().count())
                    .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            });
        }
        SortCriteria::Score => {
            words.sort_by(|a, b| {
                scrabble_score(b)
                    .cmp(&scrabble_score(a))
                    .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            });
        }
    }
}

/// Words of one length, in the order the sort stage produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthGroup {
    pub length: usize,
    pub words: Vec<String>,
}

/// Bucket words by exact length, longest group first
///
/// Input order is preserved inside each group; no word appears in more than
/// one group since the grouping key is the word's own length.
///
/// # Examples
/// ```
/// use anagram_odyssey::engine::group_by_length;
///
/// let words = ["ants", "cat", "tans", "bat"].map(String::from);
/// let groups = group_by_length(&words);
///
/// assert_eq!(groups[0].length, 4);
/// assert_eq!(groups[0].words, vec!["ants", "tans"]);
/// assert_eq!(groups[1].length, 3);
/// assert_eq!(groups[1].words, vec!["cat", "bat"]);
/// ```
#[must_use]
pub fn group_by_length(words: &[String]) -> Vec<LengthGroup> {
    let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();

    for word in words {
        buckets
            .entry(word.chars().count())
            .or_default()
            .push(word.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(length, words)| LengthGroup { length, words })
        .collect()
}

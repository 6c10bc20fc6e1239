//! Anagram matcher
//!
//! The single synchronous scan at the heart of a search: every dictionary
//! entry is tested against the query bag's letter counts. Entries carry
//! precomputed counts, so the per-word work is a 26-slot comparison.

use crate::core::{LetterBag, WordEntry};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Find every dictionary word formable from the bag's letters
///
/// A word matches when its length is at least `min_length` and each of its
/// letter counts is at most the bag's count for that letter. The query word
/// itself matches when it is in the dictionary. `min_length` values below 1
/// are coerced to 1; an empty bag yields no matches.
///
/// Results come back in the dictionary's lexicographic order. Capping to a
/// display limit is the caller's concern, applied after sorting.
///
/// # Examples
/// ```
/// use anagram_odyssey::core::LetterBag;
/// use anagram_odyssey::dictionary::Dictionary;
/// use anagram_odyssey::engine::find_anagrams;
///
/// let dict = Dictionary::build("silent enlist tin list");
/// let bag = LetterBag::from_input("listen");
///
/// let matches = find_anagrams(&bag, &dict, 4);
/// assert_eq!(matches, vec!["enlist", "list", "silent"]);
/// ```
#[must_use]
pub fn find_anagrams<'a>(
    bag: &LetterBag,
    dictionary: &'a Dictionary,
    min_length: usize,
) -> Vec<&'a str> {
    let min_length = min_length.max(1);

    if bag.is_empty() {
        return Vec::new();
    }

    dictionary
        .entries()
        .par_iter()
        .filter(|entry| entry.len() >= min_length && bag.can_form(entry.counts()))
        .map(WordEntry::text)
        .collect()
}

//! Letter multiset for anagram queries
//!
//! A `LetterBag` counts the letters available for forming words, built by
//! normalizing arbitrary user input.

use std::fmt;

/// Number of letters in the alphabet; bag counts are indexed `a..=z`.
pub const ALPHABET_LEN: usize = 26;

/// A countable multiset of letters derived from free-form input
///
/// Construction lowercases the input and drops everything outside `a-z`,
/// so a bag exists for any input string, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    counts: [u16; ALPHABET_LEN],
    normalized: String,
}

impl LetterBag {
    /// Build a bag from raw user input
    ///
    /// Total over arbitrary input: non-letters are discarded, ASCII
    /// uppercase is folded to lowercase.
    ///
    /// # Examples
    /// ```
    /// use anagram_odyssey::core::LetterBag;
    ///
    /// let bag = LetterBag::from_input(" Li, sten!3 ");
    /// assert_eq!(bag.normalized(), "listen");
    /// assert_eq!(bag.total(), 6);
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let mut counts = [0u16; ALPHABET_LEN];
        let mut normalized = String::with_capacity(input.len());

        for ch in input.chars() {
            let ch = ch.to_ascii_lowercase();
            if ch.is_ascii_lowercase() {
                counts[(ch as u8 - b'a') as usize] += 1;
                normalized.push(ch);
            }
        }

        Self { counts, normalized }
    }

    /// Count of a single letter in the bag
    ///
    /// Returns 0 for anything that is not an ASCII letter.
    #[must_use]
    pub fn count(&self, letter: char) -> u16 {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.counts[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Total number of letters in the bag
    #[must_use]
    pub fn total(&self) -> usize {
        self.normalized.len()
    }

    /// True if the bag holds no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// The normalized query string (lowercase letters only, input order)
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Sub-multiset test: can a word with these letter counts be formed?
    ///
    /// True iff every letter's count in `word_counts` is at most the bag's
    /// count for that letter.
    #[must_use]
    pub fn can_form(&self, word_counts: &[u8; ALPHABET_LEN]) -> bool {
        word_counts
            .iter()
            .zip(&self.counts)
            .all(|(&need, &have)| u16::from(need) <= have)
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_strips_non_letters() {
        let bag = LetterBag::from_input("He7ll-o, World!");
        assert_eq!(bag.normalized(), "helloworld");
        assert_eq!(bag.total(), 10);
    }

    #[test]
    fn counts_letters() {
        let bag = LetterBag::from_input("banana");
        assert_eq!(bag.count('a'), 3);
        assert_eq!(bag.count('n'), 2);
        assert_eq!(bag.count('b'), 1);
        assert_eq!(bag.count('z'), 0);
        assert_eq!(bag.count('A'), 3); // Case folded
        assert_eq!(bag.count('7'), 0);
    }

    #[test]
    fn empty_and_all_symbol_input() {
        assert!(LetterBag::from_input("").is_empty());
        assert!(LetterBag::from_input("123 !?").is_empty());
        assert_eq!(LetterBag::from_input("123 !?").total(), 0);
    }

    #[test]
    fn total_matches_normalized_length() {
        let bag = LetterBag::from_input("a1b2c3");
        assert_eq!(bag.total(), bag.normalized().len());
        assert_eq!(bag.total(), 3);
    }

    #[test]
    fn can_form_respects_multiplicity() {
        let bag = LetterBag::from_input("listen");

        let mut silent = [0u8; ALPHABET_LEN];
        for b in "silent".bytes() {
            silent[(b - b'a') as usize] += 1;
        }
        assert!(bag.can_form(&silent));

        // "sells" needs two l's and two s's; "listen" has one of each
        let mut sells = [0u8; ALPHABET_LEN];
        for b in "sells".bytes() {
            sells[(b - b'a') as usize] += 1;
        }
        assert!(!bag.can_form(&sells));
    }

    #[test]
    fn empty_word_always_formable() {
        let bag = LetterBag::from_input("");
        assert!(bag.can_form(&[0u8; ALPHABET_LEN]));
    }
}

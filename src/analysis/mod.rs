//! Word analysis: statistics, predicates, and scoring
//!
//! Pure, stateless functions of a single word. Every function lowercases its
//! input and considers only ASCII letters, matching the normalization the
//! rest of the engine applies.

use rustc_hash::FxHashSet;

/// Standard Scrabble tile values, indexed `a..=z`
const TILE_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Basic statistics for a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStats {
    pub length: usize,
    pub vowel_count: usize,
    pub consonant_count: usize,
    pub unique_letter_count: usize,
}

/// Compute statistics for a word
///
/// Length is the character count; consonants are everything that is not a
/// vowel, so `length == vowel_count + consonant_count` always holds.
///
/// # Examples
/// ```
/// use anagram_odyssey::analysis::word_stats;
///
/// let stats = word_stats("puzzle");
/// assert_eq!(stats.length, 6);
/// assert_eq!(stats.vowel_count, 2);
/// assert_eq!(stats.consonant_count, 4);
/// assert_eq!(stats.unique_letter_count, 5);
/// ```
#[must_use]
pub fn word_stats(word: &str) -> WordStats {
    let word = word.to_lowercase();
    let length = word.chars().count();
    let vowel_count = word.chars().filter(|c| "aeiou".contains(*c)).count();

    let unique: FxHashSet<char> = word.chars().collect();

    WordStats {
        length,
        vowel_count,
        consonant_count: length - vowel_count,
        unique_letter_count: unique.len(),
    }
}

/// True iff the word reads the same in both directions
///
/// # Examples
/// ```
/// use anagram_odyssey::analysis::is_palindrome;
///
/// assert!(is_palindrome("level"));
/// assert!(!is_palindrome("hello"));
/// ```
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let word = word.to_lowercase();
    word.chars().eq(word.chars().rev())
}

/// True iff any letter occurs more than once
#[must_use]
pub fn has_repeated_letters(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.to_lowercase().chars().any(|c| !seen.insert(c))
}

/// Sum of standard Scrabble tile values over the word's letters
///
/// Non-letter characters score zero.
///
/// # Examples
/// ```
/// use anagram_odyssey::analysis::scrabble_score;
///
/// assert_eq!(scrabble_score("quiz"), 22);
/// assert_eq!(scrabble_score("cat"), 5);
/// ```
#[must_use]
pub fn scrabble_score(word: &str) -> u32 {
    word.bytes()
        .map(|b| b.to_ascii_lowercase())
        .filter(u8::is_ascii_lowercase)
        .map(|b| TILE_VALUES[(b - b'a') as usize])
        .sum()
}

/// Difficulty score for a word
///
/// Deterministic combination of length, tile value, and letter diversity:
/// `length * 1.5 + scrabble_score + unique_letter_count * 0.5`. Longer words
/// with rarer letters score higher.
///
/// # Examples
/// ```
/// use anagram_odyssey::analysis::difficulty;
///
/// assert!(difficulty("quiz") > difficulty("cat"));
/// ```
#[must_use]
pub fn difficulty(word: &str) -> f64 {
    let stats = word_stats(word);
    let score = scrabble_score(word);

    stats.length as f64 * 1.5 + f64::from(score) + stats.unique_letter_count as f64 * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_basic() {
        let stats = word_stats("listen");
        assert_eq!(stats.length, 6);
        assert_eq!(stats.vowel_count, 2);
        assert_eq!(stats.consonant_count, 4);
        assert_eq!(stats.unique_letter_count, 6);
    }

    #[test]
    fn stats_repeated_letters() {
        let stats = word_stats("banana");
        assert_eq!(stats.length, 6);
        assert_eq!(stats.vowel_count, 3);
        assert_eq!(stats.consonant_count, 3);
        assert_eq!(stats.unique_letter_count, 3);
    }

    #[test]
    fn stats_length_is_vowels_plus_consonants() {
        for word in ["a", "rhythm", "queue", "strengths"] {
            let stats = word_stats(word);
            assert_eq!(stats.length, stats.vowel_count + stats.consonant_count);
        }
    }

    #[test]
    fn stats_empty_word() {
        let stats = word_stats("");
        assert_eq!(stats.length, 0);
        assert_eq!(stats.vowel_count, 0);
        assert_eq!(stats.consonant_count, 0);
        assert_eq!(stats.unique_letter_count, 0);
    }

    #[test]
    fn palindrome_fixtures() {
        assert!(is_palindrome("level"));
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("Level")); // Case folded
        assert!(is_palindrome("a"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn repeated_letters() {
        assert!(has_repeated_letters("hello"));
        assert!(has_repeated_letters("banana"));
        assert!(!has_repeated_letters("cat"));
        assert!(!has_repeated_letters(""));
        assert!(has_repeated_letters("Aa")); // Case folded
    }

    #[test]
    fn scrabble_score_fixtures() {
        assert_eq!(scrabble_score("quiz"), 22); // 10 + 1 + 1 + 10
        assert_eq!(scrabble_score("cat"), 5); // 3 + 1 + 1
        assert_eq!(scrabble_score("jazz"), 29); // 8 + 1 + 10 + 10
        assert_eq!(scrabble_score(""), 0);
        assert_eq!(scrabble_score("QUIZ"), 22);
        assert_eq!(scrabble_score("qu1z"), 21); // Digit scores nothing
    }

    #[test]
    fn tile_values_cover_alphabet() {
        // Every letter scores at least 1
        for b in b'a'..=b'z' {
            assert!(scrabble_score(std::str::from_utf8(&[b]).unwrap()) >= 1);
        }
    }

    #[test]
    fn difficulty_is_deterministic() {
        let a = difficulty("quartz");
        let b = difficulty("quartz");
        assert!((a - b).abs() < f64::EPSILON);
    }

    #[test]
    fn difficulty_relative_ordering() {
        assert!(difficulty("quiz") > difficulty("cat"));
        assert!(difficulty("quizzical") > difficulty("quiz"));
        assert!(difficulty("ab") > difficulty("a"));
    }

    #[test]
    fn difficulty_total_over_odd_input() {
        // Total function: no panic, finite output for any string
        assert!(difficulty("").is_finite());
        assert!(difficulty("123!?").is_finite());
    }
}

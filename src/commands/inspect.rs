//! Word inspection command
//!
//! Collects every per-word measurement the analyzer offers into one report.

use crate::analysis::{
    WordStats, difficulty, has_repeated_letters, is_palindrome, scrabble_score, word_stats,
};
use crate::dictionary::Dictionary;

/// Full analysis of a single word
#[derive(Debug, Clone)]
pub struct WordReport {
    pub word: String,
    pub stats: WordStats,
    pub scrabble_score: u32,
    pub difficulty: f64,
    pub palindrome: bool,
    pub repeated_letters: bool,
    pub in_dictionary: bool,
}

/// Analyze one word against a dictionary
///
/// Total over arbitrary input; an unknown or malformed word still gets a
/// report, with `in_dictionary` false.
#[must_use]
pub fn inspect_word(word: &str, dictionary: &Dictionary) -> WordReport {
    let normalized = word.trim().to_lowercase();

    WordReport {
        stats: word_stats(&normalized),
        scrabble_score: scrabble_score(&normalized),
        difficulty: difficulty(&normalized),
        palindrome: is_palindrome(&normalized),
        repeated_letters: has_repeated_letters(&normalized),
        in_dictionary: dictionary.contains(&normalized),
        word: normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dictionary() -> Dictionary {
        Dictionary::build("level quiz listen")
    }

    #[test]
    fn report_for_known_word() {
        let report = inspect_word("Level", &fixture_dictionary());
        assert_eq!(report.word, "level");
        assert!(report.in_dictionary);
        assert!(report.palindrome);
        assert!(report.repeated_letters);
        assert_eq!(report.stats.length, 5);
        assert_eq!(report.scrabble_score, 8); // 1+1+4+1+1
    }

    #[test]
    fn report_for_unknown_word() {
        let report = inspect_word("quartz", &fixture_dictionary());
        assert!(!report.in_dictionary);
        assert!(!report.palindrome);
        assert!(report.difficulty > 0.0);
    }

    #[test]
    fn report_trims_and_lowercases() {
        let report = inspect_word("  QUIZ  ", &fixture_dictionary());
        assert_eq!(report.word, "quiz");
        assert!(report.in_dictionary);
        assert_eq!(report.scrabble_score, 22);
    }
}

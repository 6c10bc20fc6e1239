//! Word-of-the-day and random word selection
//!
//! The daily word must be identical for every caller on the same date, so it
//! is derived from the calendar date alone: the date key is mixed through a
//! deterministic hash and reduced modulo the dictionary's stable sort order.
//! Random selection, by contrast, is explicitly non-deterministic.

use crate::core::WordEntry;
use crate::dictionary::Dictionary;
use chrono::{Datelike, NaiveDate, Utc};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Select the word of the day for a given calendar date
///
/// Deterministic for a given date and dictionary content: the same call
/// returns the same word across processes and restarts. Returns `None` only
/// for an empty dictionary.
///
/// # Examples
/// ```
/// use anagram_odyssey::daily::word_of_the_day;
/// use anagram_odyssey::dictionary::Dictionary;
/// use chrono::NaiveDate;
///
/// let dict = Dictionary::build("apple banana cherry");
/// let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
///
/// let first = word_of_the_day(&dict, date);
/// let second = word_of_the_day(&dict, date);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn word_of_the_day(dictionary: &Dictionary, date: NaiveDate) -> Option<&str> {
    if dictionary.is_empty() {
        return None;
    }

    // Date key in yyyymmdd form
    let key = u64::from(date.year_ce().1) * 10_000
        + u64::from(date.month()) * 100
        + u64::from(date.day());

    // Consecutive dates would otherwise pick adjacent words in sort order
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);

    let index = (hasher.finish() % dictionary.len() as u64) as usize;
    dictionary.word_at(index)
}

/// Select the word of the day for today (UTC)
#[must_use]
pub fn word_of_the_day_today(dictionary: &Dictionary) -> Option<&str> {
    word_of_the_day(dictionary, Utc::now().date_naive())
}

/// Pick a uniformly random word from the dictionary
///
/// Unlike the daily word this varies call to call; it backs the "surprise
/// me" input suggestion.
#[must_use]
pub fn select_random_word(dictionary: &Dictionary) -> Option<&str> {
    use rand::prelude::IndexedRandom;

    dictionary
        .entries()
        .choose(&mut rand::rng())
        .map(WordEntry::text)
}

//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or use the embedded
//! default list. The compressed-wordlist download of the full product is an
//! external collaborator; whatever text it yields goes through the same
//! `Dictionary::build` path.

use super::{Dictionary, WORDS};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a plain-text word list file
///
/// One word per line (or any whitespace separation); invalid tokens are
/// skipped rather than failing the load.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagram_odyssey::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::build(&content))
}

/// Build the default dictionary from the embedded word list
///
/// # Examples
/// ```
/// use anagram_odyssey::dictionary::loader::load_embedded;
///
/// let dict = load_embedded();
/// assert!(!dict.is_empty());
/// ```
#[must_use]
pub fn load_embedded() -> Dictionary {
    Dictionary::from_words(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_embedded_is_nonempty_and_sorted() {
        let dict = load_embedded();
        assert!(!dict.is_empty());

        let words: Vec<&str> = dict.words().collect();
        let mut sorted = words.clone();
        sorted.sort_unstable();
        assert_eq!(words, sorted);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file("no/such/wordlist.txt");
        assert!(result.is_err());
    }
}

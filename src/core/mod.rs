//! Core domain types for anagram search
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod entry;
mod letter_bag;

pub use entry::{WordEntry, WordEntryError};
pub use letter_bag::{ALPHABET_LEN, LetterBag};

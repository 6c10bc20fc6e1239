//! Anagram Odyssey word-engine
//!
//! Finds every dictionary word formable from a subset of the letters you
//! have, then scores, groups, and shares the results.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_odyssey::dictionary::Dictionary;
//! use anagram_odyssey::engine::{Engine, SearchOptions};
//! use std::sync::Arc;
//!
//! let dict = Arc::new(Dictionary::build("silent enlist tin list"));
//! let engine = Engine::with_dictionary(dict);
//!
//! let result = engine.search("listen", &SearchOptions::default()).unwrap();
//! assert_eq!(result.matches, vec!["enlist", "list", "silent"]);
//! ```

// Core domain types
pub mod core;

// The indexed word list
pub mod dictionary;

// Search: matcher, sorting, grouping
pub mod engine;

// Per-word statistics and scoring
pub mod analysis;

// Word-of-the-day and random selection
pub mod daily;

// Per-session history and favorites
pub mod session;

// Shareable search summaries
pub mod share;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Search command
//!
//! Runs a full search pipeline: engine search (scan, sort, truncate), then
//! length grouping for display.

use crate::engine::{Engine, EngineError, LengthGroup, SearchOptions, group_by_length};

/// Result of one search, ready for rendering
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub normalized_input: String,
    /// Match count before the display cap
    pub total_matches: usize,
    /// Matches after sorting and truncation, ungrouped
    pub matches: Vec<String>,
    /// The same matches bucketed by length, longest first
    pub groups: Vec<LengthGroup>,
}

/// Run a search and group the capped results for display
///
/// # Errors
///
/// Returns `EngineError::DictionaryUnavailable` if the engine has no
/// dictionary yet.
pub fn run_search(
    engine: &Engine,
    letters: &str,
    options: &SearchOptions,
) -> Result<SearchOutcome, EngineError> {
    let result = engine.search(letters, options)?;
    let groups = group_by_length(&result.matches);

    Ok(SearchOutcome {
        normalized_input: result.normalized_input,
        total_matches: result.total_matches,
        matches: result.matches,
        groups,
    })
}

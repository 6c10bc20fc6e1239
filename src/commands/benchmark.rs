//! Benchmark command
//!
//! Measures search throughput: each dictionary scan is a bounded synchronous
//! unit of work, so searches-per-second is the number that matters for a
//! host putting the engine behind a request handler.

use crate::engine::{Engine, EngineError, SearchOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub searches: usize,
    pub dictionary_size: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run `count` searches using dictionary words as query inputs
///
/// Queries cycle through the dictionary itself so every search has at least
/// one possible match and realistic letter distributions.
///
/// # Errors
///
/// Returns `EngineError::DictionaryUnavailable` if the engine has no
/// dictionary yet.
pub fn run_benchmark(engine: &Engine, count: usize) -> Result<BenchmarkResult, EngineError> {
    let dictionary = engine
        .dictionary()
        .ok_or(EngineError::DictionaryUnavailable)?
        .clone();

    let queries: Vec<String> = dictionary
        .words()
        .cycle()
        .take(count)
        .map(ToString::to_string)
        .collect();

    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    // Uncapped, minimum length 1: the heaviest configuration a caller can ask for
    let options = SearchOptions {
        min_length: 1,
        max_results: usize::MAX,
        sort: crate::engine::SortCriteria::Alphabetical,
    };

    let mut total_matches = 0;
    let start = Instant::now();

    for query in &queries {
        let result = engine.search(query, &options)?;
        total_matches += result.total_matches;
        pb.inc(1);
    }

    let duration = start.elapsed();
    pb.finish_and_clear();

    let searches = queries.len();

    Ok(BenchmarkResult {
        searches,
        dictionary_size: dictionary.len(),
        total_matches,
        average_matches: if searches == 0 {
            0.0
        } else {
            total_matches as f64 / searches as f64
        },
        duration,
        searches_per_second: searches as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

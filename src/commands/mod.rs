//! Command implementations

pub mod benchmark;
pub mod inspect;
pub mod interactive;
pub mod search;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use inspect::{WordReport, inspect_word};
pub use interactive::run_interactive;
pub use search::{SearchOutcome, run_search};

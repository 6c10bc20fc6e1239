//! Per-session mutable state
//!
//! History and favorites belong to exactly one session at a time. A shared
//! service must hand each session its own instances; nothing here locks.

mod favorites;
mod history;

pub use favorites::Favorites;
pub use history::{DEFAULT_CAPACITY, HistoryLog};

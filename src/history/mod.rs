//! Bounded, deduplicated conversion history.
//!
//! See [`HistoryStore`] for the ordering, eviction and duplicate rules.

pub mod error;
pub mod store;

pub use error::HistoryError;
pub use store::{HistoryStore, MAX_HISTORY_ENTRIES};

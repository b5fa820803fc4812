//! Prediction history domain module.
//!
//! A history entry is an abbreviated record of one successful single-pair
//! prediction: the two identifiers and the score/label, never the sequences.

mod model;
mod repository;

pub use model::{HISTORY_STORAGE_KEY, HistoryEntry, HistoryInput, HistoryResult, sort_newest_first};
pub use repository::HistoryRepository;

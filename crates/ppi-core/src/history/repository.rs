//! History repository trait.

use async_trait::async_trait;

use super::model::HistoryEntry;
use crate::error::Result;

/// An append-only log of past predictions.
///
/// Implementations never deduplicate: predicting the same pair twice yields
/// two independent entries. Unreadable stored content is treated as an empty
/// list rather than reported.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Appends an entry to the stored list.
    async fn append(&self, entry: HistoryEntry) -> Result<()>;

    /// Returns all entries, newest first.
    async fn read_all(&self) -> Result<Vec<HistoryEntry>>;

    /// Removes the entry with `id` and returns the remaining entries in
    /// stored order. Unknown ids leave the list unchanged.
    async fn remove_by_id(&self, id: &str) -> Result<Vec<HistoryEntry>>;

    /// Deletes the stored list entirely.
    async fn clear(&self) -> Result<()>;
}

//! History listing and maintenance.

use std::sync::Arc;

use ppi_core::error::Result;
use ppi_core::history::{HistoryEntry, HistoryRepository, sort_newest_first};

pub struct HistoryUseCase {
    repository: Arc<dyn HistoryRepository>,
}

impl HistoryUseCase {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self { repository }
    }

    /// All entries, newest first.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>> {
        self.repository.read_all().await
    }

    /// Deletes one entry and returns what is left, newest first.
    pub async fn delete(&self, id: &str) -> Result<Vec<HistoryEntry>> {
        let mut remaining = self.repository.remove_by_id(id).await?;
        sort_newest_first(&mut remaining);
        Ok(remaining)
    }

    pub async fn clear(&self) -> Result<()> {
        self.repository.clear().await
    }
}

//! JSON file-backed history repository.
//!
//! Persists the `ppi_history` list as a JSON array. Every operation goes back
//! to the file, so several processes sharing one storage root see each
//! other's writes (last writer wins on a per-operation basis).

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use ppi_core::error::{PpiError, Result};
use ppi_core::history::{HistoryEntry, HistoryRepository, sort_newest_first};

use crate::paths::PpiPaths;
use crate::storage::AtomicJsonFile;

/// History repository storing entries in `ppi_history.json`.
#[derive(Clone)]
pub struct JsonHistoryRepository {
    file: Arc<AtomicJsonFile<Vec<HistoryEntry>>>,
}

impl JsonHistoryRepository {
    pub fn new(paths: &PpiPaths) -> Self {
        Self::with_path(paths.history_file())
    }

    /// Creates a repository with a custom file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
        }
    }

    /// Runs blocking file work off the async executor.
    async fn blocking<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&AtomicJsonFile<Vec<HistoryEntry>>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || f(file.as_ref()))
            .await
            .map_err(|e| PpiError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl HistoryRepository for JsonHistoryRepository {
    async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let id = entry.id.clone();
        let len = self
            .blocking(move |file| {
                Ok(file.update(Vec::new(), |entries| {
                    entries.push(entry);
                    entries.len()
                })?)
            })
            .await?;

        tracing::info!(entry_id = %id, total = len, "Appended history entry");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<HistoryEntry>> {
        let mut entries = self
            .blocking(|file| Ok(file.load_or_recover()?.unwrap_or_default()))
            .await?;
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    async fn remove_by_id(&self, id: &str) -> Result<Vec<HistoryEntry>> {
        let target = id.to_string();
        let (removed, remaining) = self
            .blocking(move |file| {
                Ok(file.update(Vec::new(), |entries| {
                    let before = entries.len();
                    entries.retain(|entry| entry.id != target);
                    (before - entries.len(), entries.clone())
                })?)
            })
            .await?;

        tracing::info!(entry_id = %id, removed, "Removed history entry");
        Ok(remaining)
    }

    async fn clear(&self) -> Result<()> {
        self.blocking(|file| Ok(file.remove()?)).await?;
        tracing::info!("Cleared prediction history");
        Ok(())
    }
}

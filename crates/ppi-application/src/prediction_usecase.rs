//! Single and batch prediction use case.

use std::path::Path;
use std::sync::Arc;

use ppi_core::batch::{BatchPredictionResult, BatchRow, BatchUpload, UploadFile};
use ppi_core::error::{PpiError, Result};
use ppi_core::history::{HistoryEntry, HistoryRepository};
use ppi_core::prediction::{PredictionRequest, PredictionResult, PredictionService};
use ppi_core::validation::{FASTA_EXTENSIONS, PAIRS_EXTENSIONS, Validator};

/// A batch response together with its parsed preview rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub result: BatchPredictionResult,
    pub rows: Vec<BatchRow>,
}

/// Runs predictions and records successful single predictions in history.
pub struct PredictionUseCase {
    service: Arc<dyn PredictionService>,
    history: Arc<dyn HistoryRepository>,
}

impl PredictionUseCase {
    pub fn new(service: Arc<dyn PredictionService>, history: Arc<dyn HistoryRepository>) -> Self {
        Self { service, history }
    }

    /// Validates the form, calls the backend and appends one history entry.
    ///
    /// Nothing is recorded when validation or the request fails.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        request.validate()?;

        let result = self.service.predict(request).await?;

        let entry = HistoryEntry::record(request, &result);
        tracing::debug!(id = %entry.id, "Recording prediction in history");
        self.history.append(entry).await?;

        Ok(result)
    }

    /// Reads both files from disk and submits them as a batch.
    pub async fn predict_batch_files(
        &self,
        fasta_path: Option<&Path>,
        pairs_path: Option<&Path>,
    ) -> Result<BatchOutcome> {
        Validator::new()
            .require_file("fasta_file", fasta_path, FASTA_EXTENSIONS)
            .require_file("pairs_file", pairs_path, PAIRS_EXTENSIONS)
            .finish()?;

        let (Some(fasta_path), Some(pairs_path)) = (fasta_path, pairs_path) else {
            return Err(PpiError::internal("validated paths are missing"));
        };

        let upload = BatchUpload::new(
            read_upload(fasta_path).await?,
            read_upload(pairs_path).await?,
        );
        self.predict_batch(&upload).await
    }

    /// Submits an in-memory upload. Batch results are not recorded in history.
    pub async fn predict_batch(&self, upload: &BatchUpload) -> Result<BatchOutcome> {
        upload.validate()?;

        let result = self.service.predict_batch(upload).await?;
        let rows = result.rows();
        tracing::debug!(rows = rows.len(), "Batch prediction finished");

        Ok(BatchOutcome { result, rows })
    }
}

async fn read_upload(path: &Path) -> Result<UploadFile> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PpiError::io(format!("Failed to read {}: {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadFile::new(file_name, bytes))
}

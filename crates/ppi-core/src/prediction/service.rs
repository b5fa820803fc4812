//! Prediction service trait.

use async_trait::async_trait;

use super::model::{PredictionRequest, PredictionResult};
use crate::batch::{BatchPredictionResult, BatchUpload};
use crate::error::Result;

/// Remote prediction backend.
///
/// One call issues exactly one request: no retries, no deduplication and no
/// cancellation. A non-success HTTP status surfaces as
/// `PpiError::RequestFailed`.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Scores a single protein pair.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult>;

    /// Uploads a FASTA file and a pairs file for batch scoring.
    async fn predict_batch(&self, upload: &BatchUpload) -> Result<BatchPredictionResult>;
}

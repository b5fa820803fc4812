//! History entry model.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prediction::{PredictionRequest, PredictionResult};

/// Storage key under which the history list is persisted.
pub const HISTORY_STORAGE_KEY: &str = "ppi_history";

/// Identifiers of the predicted pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryInput {
    pub id1: String,
    pub id2: String,
}

/// Score and label of the prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResult {
    pub score: f64,
    pub label: String,
}

/// One persisted past prediction. Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Client-generated unique identifier.
    pub id: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    pub input: HistoryInput,
    pub result: HistoryResult,
}

impl HistoryEntry {
    /// Builds an entry stamped with the current time and a fresh UUID.
    pub fn record(request: &PredictionRequest, result: &PredictionResult) -> Self {
        Self::record_at(request, result, Utc::now().timestamp_millis())
    }

    pub fn record_at(request: &PredictionRequest, result: &PredictionResult, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            input: HistoryInput {
                id1: request.protein1.id.clone(),
                id2: request.protein2.id.clone(),
            },
            result: HistoryResult {
                score: result.score,
                label: result.label.clone(),
            },
        }
    }
}

/// Display order: descending by timestamp. Stable, so equal timestamps keep
/// insertion order.
pub fn sort_newest_first(entries: &mut [HistoryEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

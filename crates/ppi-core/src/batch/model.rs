//! Batch prediction models.

use serde::{Deserialize, Serialize};

use super::parser::parse_batch_text;
use crate::error::Result;
use crate::prediction::PredictionResult;
use crate::validation::{FASTA_EXTENSIONS, PAIRS_EXTENSIONS, Validator};

/// A file selected for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// The two files of a batch request, sent as multipart fields
/// `fasta_file` and `pairs_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchUpload {
    pub fasta: UploadFile,
    pub pairs: UploadFile,
}

impl BatchUpload {
    pub fn new(fasta: UploadFile, pairs: UploadFile) -> Self {
        Self { fasta, pairs }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .require_file(
                "fasta_file",
                Some(std::path::Path::new(&self.fasta.file_name)),
                FASTA_EXTENSIONS,
            )
            .require_file(
                "pairs_file",
                Some(std::path::Path::new(&self.pairs.file_name)),
                PAIRS_EXTENSIONS,
            )
            .finish()
    }
}

/// Summary the server attaches to a plain-text batch response through
/// `X-*` headers. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchMetadata {
    pub model: Option<String>,
    pub threshold: Option<f64>,
    pub timestamp: Option<String>,
    pub total_pairs: Option<u64>,
    pub successful_predictions: Option<u64>,
    pub failed_predictions: Option<u64>,
}

impl BatchMetadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One parsed line of a plain-text batch payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub id1: String,
    pub id2: String,
    pub score: f64,
}

/// Response of `POST /api/predict/batch`, dispatched on `Content-Type`.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchPredictionResult {
    Json(Vec<PredictionResult>),
    Text {
        text: String,
        metadata: BatchMetadata,
    },
}

impl BatchPredictionResult {
    /// Preview rows parsed from a text payload; empty for JSON results.
    pub fn rows(&self) -> Vec<BatchRow> {
        match self {
            Self::Json(_) => Vec::new(),
            Self::Text { text, .. } => parse_batch_text(text),
        }
    }

    pub fn metadata(&self) -> Option<&BatchMetadata> {
        match self {
            Self::Json(_) => None,
            Self::Text { metadata, .. } => Some(metadata),
        }
    }
}

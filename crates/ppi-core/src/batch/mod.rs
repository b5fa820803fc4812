//! Batch prediction domain module.
//!
//! # Module Structure
//!
//! - `model`: upload, response and row types
//! - `parser`: best-effort parsing of the `text/plain` batch payload

mod model;
mod parser;

pub use model::{BatchMetadata, BatchPredictionResult, BatchRow, BatchUpload, UploadFile};
pub use parser::parse_batch_text;

//! Single-pair prediction domain module.
//!
//! # Module Structure
//!
//! - `model`: request/result shapes
//! - `payload`: the JSON body variants accepted by the prediction endpoint
//! - `service`: the `PredictionService` trait implemented by HTTP clients

mod model;
mod payload;
mod service;

pub use model::{PredictionRequest, PredictionResult, ProteinRecord};
pub use payload::{PayloadStyle, PredictPayload};
pub use service::PredictionService;

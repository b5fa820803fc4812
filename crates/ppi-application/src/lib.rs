//! Application layer for the PPI client.
//!
//! Use cases coordinate the domain traits from `ppi-core` with whatever
//! implementations the caller injects (HTTP clients, file-backed stores, or
//! test fakes).

pub mod auth_usecase;
pub mod history_usecase;
pub mod prediction_usecase;

pub use auth_usecase::AuthUseCase;
pub use history_usecase::HistoryUseCase;
pub use prediction_usecase::{BatchOutcome, PredictionUseCase};

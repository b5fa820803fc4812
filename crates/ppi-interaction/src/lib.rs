//! HTTP clients for the PPI prediction and authentication backends.
//!
//! [`PpiApiClient`] implements both [`ppi_core::prediction::PredictionService`]
//! and [`ppi_core::auth::AuthService`] over a single `reqwest::Client`.

mod auth_api;
mod batch_response;
mod client;
mod prediction_api;

pub use batch_response::{is_json_content_type, metadata_from_headers};
pub use client::{PpiApiClient, endpoints};

//! Shared HTTP client state and error mapping.

use ppi_core::config::ApiConfig;
use ppi_core::error::{PpiError, Result};
use ppi_core::prediction::PayloadStyle;
use reqwest::{Client, StatusCode};

/// Fixed endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const PREDICT: &str = "/api/predict";
    pub const PREDICT_BATCH: &str = "/api/predict/batch";
    pub const REGISTER: &str = "/api/auth/register";
    pub const LOGIN: &str = "/api/auth/login";
    pub const FORGOT_PASSWORD: &str = "/api/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/api/auth/reset-password";
    pub const CHANGE_PASSWORD: &str = "/api/auth/change-password";
}

/// Client for the prediction and auth APIs.
///
/// Requests are sent once, without retries and without a request timeout;
/// a call runs until the server answers or the connection fails.
#[derive(Clone)]
pub struct PpiApiClient {
    pub(crate) client: Client,
    pub(crate) config: ApiConfig,
}

impl PpiApiClient {
    /// Creates a client for the given API configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| PpiError::internal(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Sets the JSON body variant used for single predictions.
    pub fn with_payload_style(mut self, style: PayloadStyle) -> Self {
        self.config.payload_style = style;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Fails with `RequestFailed` unless `status` is 2xx.
pub(crate) fn ensure_success(context: &'static str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(PpiError::request_failed(
        context,
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
    ))
}

/// Maps a transport or body-decoding failure.
pub(crate) fn map_reqwest_error(context: &str, err: reqwest::Error) -> PpiError {
    if err.is_decode() {
        PpiError::Serialization {
            format: "JSON".to_string(),
            message: format!("{} response: {}", context, err),
        }
    } else {
        PpiError::network(format!("{}: {}", context, err))
    }
}

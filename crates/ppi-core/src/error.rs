//! Error types for the PPI client.

use crate::validation::FieldError;
use thiserror::Error;

/// A shared error type for the entire PPI client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
///
/// Local storage corruption is deliberately absent: stores recover from it
/// silently instead of surfacing an error.
#[derive(Error, Debug, Clone)]
pub enum PpiError {
    /// The server answered with a non-success HTTP status.
    #[error("{context} failed: {status} {status_text}")]
    RequestFailed {
        context: &'static str,
        status: u16,
        status_text: String,
    },

    /// Transport-level failure (connection refused, DNS, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// Logical error reported by the API inside an otherwise successful body.
    #[error("{0}")]
    Api(String),

    /// Client-side input validation failed.
    #[error("Invalid input: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl PpiError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a RequestFailed error
    pub fn request_failed(
        context: &'static str,
        status: u16,
        status_text: impl Into<String>,
    ) -> Self {
        Self::RequestFailed {
            context,
            status,
            status_text: status_text.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an Api error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an HTTP status failure
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    /// Returns the HTTP status code when the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PpiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PpiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PpiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PpiError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<Vec<FieldError>> for PpiError {
    fn from(fields: Vec<FieldError>) -> Self {
        Self::Validation(fields)
    }
}

/// A type alias for `Result<T, PpiError>`.
pub type Result<T> = std::result::Result<T, PpiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_embeds_status() {
        let err = PpiError::request_failed("Predict", 500, "Internal Server Error");
        assert_eq!(err.to_string(), "Predict failed: 500 Internal Server Error");
        assert_eq!(err.status(), Some(500));
        assert!(err.is_request_failed());
    }

    #[test]
    fn api_error_is_verbatim() {
        let err = PpiError::api("Email already registered");
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn validation_lists_every_field() {
        let err = PpiError::from(vec![
            FieldError::required("id1"),
            FieldError::required("seq2"),
        ]);
        assert!(err.is_validation());
        let message = err.to_string();
        assert!(message.contains("id1"));
        assert!(message.contains("seq2"));
    }

    #[test]
    fn io_error_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.fasta");
        let err: PpiError = io.into();
        assert!(err.to_string().contains("NotFound"));
    }
}

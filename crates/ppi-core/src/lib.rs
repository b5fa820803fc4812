pub mod auth;
pub mod batch;
pub mod config;
pub mod error;
pub mod history;
pub mod prediction;
pub mod session;
pub mod validation;

// Re-export common error type
pub use error::{PpiError, Result};

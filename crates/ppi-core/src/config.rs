//! Client configuration models.

use serde::{Deserialize, Serialize};

use crate::prediction::PayloadStyle;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where and how to reach the prediction and auth backends.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub payload_style: PayloadStyle,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            payload_style: PayloadStyle::default(),
        }
    }
}

impl ApiConfig {
    /// Joins `path` onto the base URL without doubling the slash.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

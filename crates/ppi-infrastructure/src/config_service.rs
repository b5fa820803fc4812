//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and applies environment
//! overrides on top of it.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use ppi_core::config::RootConfig;
use ppi_core::error::{PpiError, Result};

use crate::paths::PpiPaths;

/// Environment variable overriding `api.base_url`.
pub const PPI_API_BASE_ENV: &str = "PPI_API_BASE";

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &PpiPaths) -> Self {
        Self::with_path(paths.config_file())
    }

    /// Creates a service reading a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing file yields defaults; an unparseable one is a
    /// `PpiError::Config`.
    pub fn get_config(&self) -> Result<RootConfig> {
        if let Some(cached) = self.read_cache() {
            return Ok(cached);
        }

        let mut loaded = self.load_file()?;
        apply_env_overrides(&mut loaded);

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Writes a default `config.toml` when none exists and returns its path.
    pub fn ensure_config_file(&self) -> Result<PathBuf> {
        if self.path.exists() {
            return Ok(self.path.clone());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&RootConfig::default())?;
        fs::write(&self.path, content)?;
        tracing::info!("Created default configuration at {}", self.path.display());
        Ok(self.path.clone())
    }

    fn read_cache(&self) -> Option<RootConfig> {
        self.config.read().ok().and_then(|lock| lock.clone())
    }

    fn load_file(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            PpiError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

fn apply_env_overrides(config: &mut RootConfig) {
    if let Ok(base) = env::var(PPI_API_BASE_ENV)
        && !base.trim().is_empty()
    {
        config.api.base_url = base;
    }
}

//! Unified path management for PPI client files.
//!
//! Every file the client persists lives under one root directory:
//!
//! ```text
//! ~/.config/ppi/               # or $PPI_HOME
//! ├── config.toml              # API configuration
//! ├── ppi_history.json         # prediction history
//! ├── session.json             # access token + user profile
//! └── preferences.json         # theme
//! ```

use std::env;
use std::path::{Path, PathBuf};

use ppi_core::history::HISTORY_STORAGE_KEY;

/// Environment variable overriding the storage root.
pub const PPI_HOME_ENV: &str = "PPI_HOME";

const APP_DIR_NAME: &str = "ppi";

/// Errors that can occur during path resolution.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Home/config directory could not be determined.
    #[error("Cannot find a configuration directory")]
    ConfigDirNotFound,
}

impl From<PathError> for ppi_core::PpiError {
    fn from(err: PathError) -> Self {
        ppi_core::PpiError::config(err.to_string())
    }
}

/// Resolves the locations of every persisted file.
#[derive(Debug, Clone)]
pub struct PpiPaths {
    root: PathBuf,
}

impl PpiPaths {
    /// Uses `base` as the root when given, otherwise `$PPI_HOME`, otherwise
    /// the platform config directory joined with `ppi`.
    pub fn new(base: Option<&Path>) -> Result<Self, PathError> {
        if let Some(base) = base {
            return Ok(Self::with_root(base));
        }
        if let Ok(home) = env::var(PPI_HOME_ENV)
            && !home.trim().is_empty()
        {
            return Ok(Self::with_root(home));
        }
        let config_dir = dirs::config_dir().ok_or(PathError::ConfigDirNotFound)?;
        Ok(Self::with_root(config_dir.join(APP_DIR_NAME)))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn history_file(&self) -> PathBuf {
        self.root.join(format!("{}.json", HISTORY_STORAGE_KEY))
    }

    pub fn session_file(&self) -> PathBuf {
        self.root.join("session.json")
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.root.join("preferences.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_wins() {
        let paths = PpiPaths::new(Some(Path::new("/tmp/ppi-test"))).unwrap();
        assert_eq!(paths.root(), Path::new("/tmp/ppi-test"));
    }

    #[test]
    fn files_live_under_root() {
        let paths = PpiPaths::with_root("/data/ppi");
        assert!(paths.config_file().ends_with("config.toml"));
        assert!(paths.history_file().ends_with("ppi_history.json"));
        assert!(paths.session_file().ends_with("session.json"));
        assert!(paths.preferences_file().ends_with("preferences.json"));
        for file in [
            paths.config_file(),
            paths.history_file(),
            paths.session_file(),
            paths.preferences_file(),
        ] {
            assert!(file.starts_with(paths.root()));
        }
    }
}

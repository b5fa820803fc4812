//! Session and preference persistence.
//!
//! Login state (`access_token`, `user`) and preferences (`theme`) are kept in
//! separate files so that logging out never resets the theme.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use ppi_core::auth::UserInfo;
use ppi_core::error::{PpiError, Result};
use ppi_core::session::{Preferences, SessionRepository, SessionState, Theme};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::paths::PpiPaths;
use crate::storage::AtomicJsonFile;

/// Session repository backed by `session.json` and `preferences.json`.
///
/// Both files are loaded once at construction and cached in memory; every
/// mutation updates the cache and writes the file through.
#[derive(Clone)]
pub struct JsonSessionRepository {
    session: Arc<Mutex<SessionState>>,
    preferences: Arc<Mutex<Preferences>>,
    session_file: Arc<AtomicJsonFile<SessionState>>,
    preferences_file: Arc<AtomicJsonFile<Preferences>>,
}

impl JsonSessionRepository {
    pub async fn new(paths: &PpiPaths) -> Result<Self> {
        Self::with_paths(paths.session_file(), paths.preferences_file()).await
    }

    /// Creates a repository with custom file paths (for testing).
    pub async fn with_paths(session_path: PathBuf, preferences_path: PathBuf) -> Result<Self> {
        let session_file = Arc::new(AtomicJsonFile::new(session_path));
        let preferences_file = Arc::new(AtomicJsonFile::new(preferences_path));

        let session = load_or_default(session_file.clone()).await?;
        let preferences = load_or_default(preferences_file.clone()).await?;

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            preferences: Arc::new(Mutex::new(preferences)),
            session_file,
            preferences_file,
        })
    }

    async fn save_session(&self, state: SessionState) -> Result<()> {
        {
            let mut lock = self.session.lock().await;
            *lock = state.clone();
        }
        save(self.session_file.clone(), state).await
    }
}

async fn load_or_default<T>(file: Arc<AtomicJsonFile<T>>) -> Result<T>
where
    T: Serialize + DeserializeOwned + Default + Send + 'static,
{
    tokio::task::spawn_blocking(move || Ok(file.load_or_recover()?.unwrap_or_default()))
        .await
        .map_err(|e| PpiError::internal(format!("Failed to join task: {}", e)))?
}

async fn save<T>(file: Arc<AtomicJsonFile<T>>, value: T) -> Result<()>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    tokio::task::spawn_blocking(move || Ok(file.save(&value)?))
        .await
        .map_err(|e| PpiError::internal(format!("Failed to join task: {}", e)))?
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn get_session(&self) -> SessionState {
        self.session.lock().await.clone()
    }

    async fn set_login(&self, access_token: String, user: Option<UserInfo>) -> Result<()> {
        let state = SessionState {
            access_token: Some(access_token),
            user,
        };
        self.save_session(state).await?;
        tracing::info!("Stored access token");
        Ok(())
    }

    async fn clear_login(&self) -> Result<()> {
        self.save_session(SessionState::default()).await?;
        tracing::info!("Cleared access token");
        Ok(())
    }

    async fn get_theme(&self) -> Theme {
        self.preferences.lock().await.theme
    }

    async fn set_theme(&self, theme: Theme) -> Result<()> {
        let prefs = {
            let mut lock = self.preferences.lock().await;
            lock.theme = theme;
            *lock
        };
        save(self.preferences_file.clone(), prefs).await?;
        tracing::debug!(%theme, "Theme updated");
        Ok(())
    }
}

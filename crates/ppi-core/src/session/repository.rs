//! Session repository trait.

use async_trait::async_trait;

use super::model::{SessionState, Theme};
use crate::auth::UserInfo;
use crate::error::Result;

/// Repository for login state and user preferences.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get_session(&self) -> SessionState;

    /// Stores the access token and, when known, the user profile.
    async fn set_login(&self, access_token: String, user: Option<UserInfo>) -> Result<()>;

    /// Removes the access token and user profile.
    async fn clear_login(&self) -> Result<()>;

    async fn get_theme(&self) -> Theme;

    async fn set_theme(&self, theme: Theme) -> Result<()>;

    async fn access_token(&self) -> Option<String> {
        self.get_session()
            .await
            .access_token
            .filter(|token| !token.is_empty())
    }

    async fn is_authenticated(&self) -> bool {
        self.get_session().await.is_authenticated()
    }

    /// Flips the theme, persists it and returns the new value.
    async fn toggle_theme(&self) -> Result<Theme> {
        let next = self.get_theme().await.toggled();
        self.set_theme(next).await?;
        Ok(next)
    }
}

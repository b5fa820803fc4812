//! Authentication use case.
//!
//! Interprets auth response bodies and keeps the session store in step with
//! the outcome. The HTTP layer returns bodies verbatim; this is the only
//! place where an `error` field turns into a failure.

use std::sync::Arc;

use ppi_core::auth::{
    AuthService, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    RegisterRequest, ResetPasswordRequest, decode_login, decode_message,
};
use ppi_core::error::Result;
use ppi_core::session::{SessionRepository, SessionState};
use serde_json::Value;

pub struct AuthUseCase {
    service: Arc<dyn AuthService>,
    session: Arc<dyn SessionRepository>,
}

impl AuthUseCase {
    pub fn new(service: Arc<dyn AuthService>, session: Arc<dyn SessionRepository>) -> Self {
        Self { service, session }
    }

    /// Logs in and stores the access token and user profile.
    ///
    /// A rejected login leaves the stored session untouched.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let body = self.service.login(request).await?;
        let login = decode_login(body)?.into_result()?;

        self.session
            .set_login(login.access_token.clone(), login.user.clone())
            .await?;
        tracing::info!(email = %request.email, "Logged in");
        Ok(login)
    }

    pub async fn logout(&self) -> Result<()> {
        self.session.clear_login().await?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<String>> {
        message_of(self.service.register(request).await?)
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Option<String>> {
        message_of(self.service.forgot_password(request).await?)
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Option<String>> {
        message_of(self.service.reset_password(request).await?)
    }

    /// Sends the stored access token, if any, as a bearer token.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<Option<String>> {
        let token = self.session.access_token().await;
        if token.is_none() {
            tracing::debug!("Changing password without a stored access token");
        }
        message_of(
            self.service
                .change_password(request, token.as_deref())
                .await?,
        )
    }

    pub async fn session(&self) -> SessionState {
        self.session.get_session().await
    }
}

fn message_of(body: Value) -> Result<Option<String>> {
    decode_message(&body).into_result()
}

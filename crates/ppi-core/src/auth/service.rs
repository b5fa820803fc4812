//! Auth service trait.

use async_trait::async_trait;
use serde_json::Value;

use super::model::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::error::Result;

/// Remote authentication backend.
///
/// Each method POSTs one JSON body and returns the decoded JSON response
/// verbatim. An `error` field inside the body is not raised here; callers
/// interpret it (see [`super::decode_message`] and [`super::decode_login`]).
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<Value>;

    async fn login(&self, request: &LoginRequest) -> Result<Value>;

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Value>;

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Value>;

    /// `access_token` is sent as a bearer token when present.
    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
        access_token: Option<&str>,
    ) -> Result<Value>;
}

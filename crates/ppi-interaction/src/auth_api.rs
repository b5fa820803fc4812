//! `AuthService` over HTTP.

use async_trait::async_trait;
use ppi_core::auth::{
    AuthService, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest,
};
use ppi_core::error::{PpiError, Result};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::client::{PpiApiClient, endpoints, ensure_success, map_reqwest_error};

impl PpiApiClient {
    async fn post_auth<B: Serialize + Sync>(
        &self,
        context: &'static str,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(%url, authorized = bearer.is_some(), "Sending auth request");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| map_reqwest_error(context, e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| map_reqwest_error(context, e))?;

        decode_auth_body(context, status, &text)
    }
}

/// Decodes an auth response body.
///
/// The backend reports logical failures as `{"error": ...}` with any status,
/// so a JSON body is returned as-is regardless of status. Only a body that
/// is not JSON is an error here.
fn decode_auth_body(context: &'static str, status: StatusCode, text: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(_) => {
            ensure_success(context, status)?;
            Err(PpiError::api("Invalid response from server"))
        }
    }
}

#[async_trait]
impl AuthService for PpiApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<Value> {
        self.post_auth("Registration", endpoints::REGISTER, request, None)
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Value> {
        self.post_auth("Login", endpoints::LOGIN, request, None).await
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Value> {
        self.post_auth("Password reset request", endpoints::FORGOT_PASSWORD, request, None)
            .await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Value> {
        self.post_auth("Password reset", endpoints::RESET_PASSWORD, request, None)
            .await
    }

    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
        access_token: Option<&str>,
    ) -> Result<Value> {
        self.post_auth(
            "Password change",
            endpoints::CHANGE_PASSWORD,
            request,
            access_token,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppi_core::config::ApiConfig;
    use serde_json::json;

    #[test]
    fn json_body_is_returned_for_any_status() {
        let ok = decode_auth_body("Login", StatusCode::OK, r#"{"error":"Bad credentials"}"#)
            .unwrap();
        assert_eq!(ok, json!({"error": "Bad credentials"}));

        let unauthorized =
            decode_auth_body("Login", StatusCode::UNAUTHORIZED, r#"{"error":"nope"}"#).unwrap();
        assert_eq!(unauthorized["error"], "nope");
    }

    #[test]
    fn non_json_error_status_is_request_failed() {
        let err = decode_auth_body("Login", StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn non_json_success_is_invalid_response() {
        let err = decode_auth_body("Login", StatusCode::OK, "ok").unwrap_err();
        assert_eq!(err.to_string(), "Invalid response from server");
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        let client = PpiApiClient::new(ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        })
        .unwrap();
        let request = LoginRequest::from_form("a@b.c", "pw").unwrap();

        let err = client.login(&request).await.unwrap_err();
        assert!(matches!(err, PpiError::Network(_)));
    }
}

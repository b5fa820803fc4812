//! Decoding of auth response bodies.
//!
//! The login endpoint has shipped the access token both as `token` and as
//! `access_token`. Both are accepted here and folded into a single
//! [`LoginResponse`] so callers only ever see `access_token`.

use serde::Deserialize;
use serde_json::Value;

use super::model::UserInfo;
use crate::error::{PpiError, Result};

/// Logical result of an auth call whose HTTP exchange succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome<T> {
    Accepted(T),
    /// The body carried an `error` field; the message is shown verbatim.
    Rejected(String),
}

impl<T> AuthOutcome<T> {
    /// Turns a rejection into `PpiError::Api`.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Accepted(value) => Ok(value),
            Self::Rejected(message) => Err(PpiError::Api(message)),
        }
    }
}

/// Canonical login response.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub message: Option<String>,
    pub user: Option<UserInfo>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LoginBody {
    Error {
        error: String,
    },
    AccessToken {
        access_token: String,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        user: Option<UserInfo>,
    },
    Token {
        token: String,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        user: Option<UserInfo>,
    },
}

/// Decodes a login body into the canonical shape.
pub fn decode_login(body: Value) -> Result<AuthOutcome<LoginResponse>> {
    let decoded: LoginBody = serde_json::from_value(body)
        .map_err(|_| PpiError::api("Invalid response from server"))?;

    Ok(match decoded {
        LoginBody::Error { error } => AuthOutcome::Rejected(error),
        LoginBody::AccessToken {
            access_token,
            message,
            user,
        }
        | LoginBody::Token {
            token: access_token,
            message,
            user,
        } => AuthOutcome::Accepted(LoginResponse {
            access_token,
            message,
            user,
        }),
    })
}

/// Decodes a body of the non-login endpoints, returning its `message` if any.
pub fn decode_message(body: &Value) -> AuthOutcome<Option<String>> {
    if let Some(error) = body.get("error").and_then(error_text) {
        return AuthOutcome::Rejected(error);
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    AuthOutcome::Accepted(message)
}

fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

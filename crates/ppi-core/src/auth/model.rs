//! Auth request models and their form validation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::Validator;

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl RegisterRequest {
    /// Validates the registration form, including the password confirmation.
    pub fn from_form(
        full_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self> {
        Validator::new()
            .require("full_name", full_name)
            .require("email", email)
            .require("password", password)
            .require("confirm_password", confirm_password)
            .finish()?;
        Validator::new()
            .require_match("confirm_password", confirm_password, "password", password)
            .finish()?;

        Ok(Self {
            email: email.trim().to_string(),
            full_name: full_name.trim().to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_form(email: &str, password: &str) -> Result<Self> {
        Validator::new()
            .require("email", email)
            .require("password", password)
            .finish()?;

        Ok(Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl ForgotPasswordRequest {
    pub fn from_form(email: &str) -> Result<Self> {
        Validator::new().require("email", email).finish()?;
        Ok(Self {
            email: email.trim().to_string(),
        })
    }
}

/// Completes a password reset with the OTP code mailed by `forgot-password`.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp_code: String,
    pub new_password: String,
}

impl ResetPasswordRequest {
    pub fn from_form(
        email: &str,
        otp_code: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Self> {
        Validator::new()
            .require("email", email)
            .require("otp_code", otp_code)
            .require("new_password", new_password)
            .require("confirm_password", confirm_password)
            .finish()?;
        Validator::new()
            .require_match("confirm_password", confirm_password, "new_password", new_password)
            .finish()?;

        Ok(Self {
            email: email.trim().to_string(),
            otp_code: otp_code.trim().to_string(),
            new_password: new_password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn from_form(old_password: &str, new_password: &str) -> Result<Self> {
        Validator::new()
            .require("old_password", old_password)
            .require("new_password", new_password)
            .finish()?;

        Ok(Self {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        })
    }
}

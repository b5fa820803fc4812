//! Authentication domain module.
//!
//! The auth backend answers every call with a JSON body. A body carrying an
//! `error` field is a logical failure even when the HTTP status is 200; the
//! HTTP client returns bodies verbatim and the decoding in `response`
//! interprets them.

mod model;
mod response;
mod service;

pub use model::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, UserInfo,
};
pub use response::{AuthOutcome, LoginResponse, decode_login, decode_message};
pub use service::AuthService;

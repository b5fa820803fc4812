use anyhow::{Context, Result};
use ppi_core::auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest,
};

use crate::context::AppContext;

/// Uses the flag value when given, otherwise prompts without echo.
fn secret(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => rpassword::prompt_password(prompt)
            .with_context(|| format!("Failed to read {}", prompt.trim_end_matches(": "))),
    }
}

async fn report(ctx: &AppContext, message: Option<String>, fallback: &str) {
    let palette = ctx.palette().await;
    println!(
        "{}",
        palette.success(message.as_deref().unwrap_or(fallback))
    );
}

pub async fn register(
    ctx: &AppContext,
    full_name: &str,
    email: &str,
    password: Option<String>,
    confirm_password: Option<String>,
) -> Result<()> {
    let password = secret(password, "Password: ")?;
    let confirm_password = secret(confirm_password, "Confirm password: ")?;
    let request = RegisterRequest::from_form(full_name, email, &password, &confirm_password)?;

    let message = ctx.auth().register(&request).await?;
    report(ctx, message, "Registration successful").await;
    Ok(())
}

pub async fn login(ctx: &AppContext, email: &str, password: Option<String>) -> Result<()> {
    let password = secret(password, "Password: ")?;
    let request = LoginRequest::from_form(email, &password)?;

    let login = ctx.auth().login(&request).await?;
    let who = login
        .user
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_else(|| request.email.clone());
    report(ctx, login.message, &format!("Logged in as {}", who)).await;
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth().logout().await?;
    report(ctx, None, "Logged out").await;
    Ok(())
}

pub async fn forgot_password(ctx: &AppContext, email: &str) -> Result<()> {
    let request = ForgotPasswordRequest::from_form(email)?;
    let message = ctx.auth().forgot_password(&request).await?;
    report(ctx, message, "If the account exists, a reset code has been sent").await;
    Ok(())
}

pub async fn reset_password(
    ctx: &AppContext,
    email: &str,
    otp_code: &str,
    new_password: Option<String>,
    confirm_password: Option<String>,
) -> Result<()> {
    let new_password = secret(new_password, "New password: ")?;
    let confirm_password = secret(confirm_password, "Confirm password: ")?;
    let request =
        ResetPasswordRequest::from_form(email, otp_code, &new_password, &confirm_password)?;

    let message = ctx.auth().reset_password(&request).await?;
    report(ctx, message, "Password has been reset").await;
    Ok(())
}

pub async fn change_password(
    ctx: &AppContext,
    old_password: Option<String>,
    new_password: Option<String>,
) -> Result<()> {
    let old_password = secret(old_password, "Current password: ")?;
    let new_password = secret(new_password, "New password: ")?;
    let request = ChangePasswordRequest::from_form(&old_password, &new_password)?;

    let message = ctx.auth().change_password(&request).await?;
    report(ctx, message, "Password changed").await;
    Ok(())
}

//! Client wrappers for the signup and login endpoints. These helpers keep
//! paths and payload handling in one place so route code never touches the
//! transport directly.

use crate::app_lib::{AppError, api};
use crate::features::auth::login::extract_token;
use crate::features::auth::types::{
    LoginResponse, MessageResponse, SignupDraft, VerificationAttempt,
};
use crate::features::session::SessionStore;

/// Submits the registration draft; the service emails an OTP on success.
/// Returns the optional server-supplied confirmation message.
pub async fn signup_request(
    store: SessionStore,
    draft: &SignupDraft,
) -> Result<Option<String>, AppError> {
    let response: MessageResponse = api::post_json(store, "/signup-request", draft).await?;
    Ok(response.message)
}

/// Submits the OTP to create the account.
pub async fn signup_verify(
    store: SessionStore,
    attempt: &VerificationAttempt,
) -> Result<Option<String>, AppError> {
    let response: MessageResponse = api::post_json(store, "/signup-verify", attempt).await?;
    Ok(response.message)
}

/// Logs in with form-encoded credentials and returns the bearer token.
/// A 2xx response without a token is treated as a failure.
pub async fn login(
    store: SessionStore,
    username: &str,
    password: &str,
) -> Result<String, AppError> {
    let response: LoginResponse = api::post_form(
        store,
        "/login",
        &[("username", username), ("password", password)],
    )
    .await?;
    extract_token(response)
}

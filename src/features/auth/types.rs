//! Request and response types for the account API.

use serde::{Deserialize, Serialize};

/// Registration input collected before any network call. Sent as the
/// `/signup-request` body once all three fields are non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `/signup-verify`. The email is copied from the accepted draft,
/// never re-entered by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationAttempt {
    pub email: String,
    pub otp: String,
}

/// Successful signup responses optionally carry a message to display in
/// place of the generic success text.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

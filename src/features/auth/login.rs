//! Login submission logic kept free of view code: local validation, token
//! extraction from the response, and the session/redirect outcome.

use crate::app_lib::{AppError, nav};
use crate::features::auth::types::LoginResponse;
use crate::features::session::SessionStore;

pub const MISSING_CREDENTIALS: &str = "Please enter username and password.";
pub const LOGIN_SUCCESSFUL: &str = "Login successful. Redirecting to profile...";
const LOGIN_FAILED: &str = "Login failed.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Local validation; a failure here produces no network call.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(AppError::Validation(MISSING_CREDENTIALS.to_string()));
        }
        Ok(())
    }
}

/// Pulls the bearer token out of a 2xx login response. A response without
/// a token is a failure, equivalent to an error response.
pub fn extract_token(response: LoginResponse) -> Result<String, AppError> {
    response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppError::Semantic("login response did not include an access token".to_string())
        })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored; redirect to the profile view is due.
    Success { redirect: nav::Redirect },
    Failure { message: String },
}

/// Applies a login result: stores the credential on success and maps
/// failures to a display message. The store is untouched on failure.
pub fn resolve_login(store: SessionStore, result: Result<String, AppError>) -> LoginOutcome {
    match result {
        Ok(token) => {
            store.set(&token);
            LoginOutcome::Success {
                redirect: nav::redirect_for(nav::NavEvent::LoginSucceeded),
            }
        }
        Err(err) => LoginOutcome::Failure {
            message: err.display_message(LOGIN_FAILED),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginForm, LoginOutcome, MISSING_CREDENTIALS, extract_token, resolve_login};
    use crate::app_lib::AppError;
    use crate::app_lib::nav::Destination;
    use crate::features::auth::types::LoginResponse;
    use crate::features::session::SessionStore;

    #[test]
    fn blank_credentials_are_rejected_locally() {
        let form = LoginForm {
            username: "alice".to_string(),
            password: "  ".to_string(),
        };
        assert_eq!(
            form.validate(),
            Err(AppError::Validation(MISSING_CREDENTIALS.to_string()))
        );

        let form = LoginForm {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn token_is_stored_and_profile_redirect_scheduled() {
        let store = SessionStore::default();
        store.clear();

        let outcome = resolve_login(store, Ok("T".to_string()));

        assert_eq!(store.get(), Some("T".to_string()));
        match outcome {
            LoginOutcome::Success { redirect } => {
                assert_eq!(redirect.destination, Destination::Profile);
                assert_eq!(redirect.delay_ms, 800);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        store.clear();
    }

    #[test]
    fn missing_token_in_2xx_is_a_failure_and_store_is_unchanged() {
        let store = SessionStore::default();
        store.clear();

        let response: LoginResponse = serde_json::from_str("{}").expect("deserialize");
        let outcome = resolve_login(store, extract_token(response));

        assert_eq!(store.get(), None);
        assert_eq!(
            outcome,
            LoginOutcome::Failure {
                message: "Login failed.".to_string()
            }
        );
    }

    #[test]
    fn server_detail_is_preferred_for_failures() {
        let store = SessionStore::default();
        store.clear();

        let outcome = resolve_login(
            store,
            Err(AppError::Http {
                status: 401,
                body: r#"{"detail":"Invalid username or password"}"#.to_string(),
            }),
        );

        assert_eq!(
            outcome,
            LoginOutcome::Failure {
                message: "Invalid username or password".to_string()
            }
        );
        assert_eq!(store.get(), None);
    }
}

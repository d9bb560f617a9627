//! HTTP helpers for the account API with consistent timeouts and error
//! handling. Every helper reads the current credential from the session
//! store and attaches a bearer header when one is held; the helpers never
//! mutate the store — interpreting a response (including invalidating a
//! rejected token) is the caller's responsibility.

use super::{AppError, config::AppConfig};
use crate::features::session::SessionStore;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use url::form_urlencoded;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON from the account API.
pub async fn get_json<T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_bearer(Request::get(&url), store)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    send_json(store, path, body, Request::post).await
}

/// Puts JSON and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    send_json(store, path, body, Request::put).await
}

/// Posts form-encoded fields, used for the login endpoint.
pub async fn post_form<T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, AppError> {
    let url = build_url(path);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields {
        serializer.append_pair(name, value);
    }
    let payload = serializer.finish();

    let response = send_with_timeout(move |signal| {
        with_bearer(Request::post(&url), store)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Deletes a resource and expects an empty response body.
pub async fn delete(store: SessionStore, path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_bearer(Request::delete(&url), store)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
    body: &B,
    method: fn(&str) -> RequestBuilder,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_bearer(method(&url), store)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Attaches `Authorization: Bearer <token>` when a credential is held.
fn with_bearer(builder: RequestBuilder, store: SessionStore) -> RequestBuilder {
    match store.get() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout
/// detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses; non-2xx responses keep the raw body so callers
/// can interpret the service's `detail` payload.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http { status, body })
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http { status, body })
    }
}

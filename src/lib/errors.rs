//! Error taxonomy for the frontend and the policy for turning errors into
//! user-facing messages. Local validation errors never reach the network;
//! HTTP errors keep the raw response body so callers can interpret the
//! service's `detail` payload.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Rejected locally before any network call.
    Validation(String),
    Config(String),
    /// Transport failure with no response available.
    Network(String),
    Timeout(String),
    /// Response received with a non-2xx status; `body` is unaltered.
    Http { status: u16, body: String },
    Parse(String),
    Serialization(String),
    /// A 2xx response missing an expected field.
    Semantic(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, body } => {
                write!(formatter, "Request failed ({status}): {body}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Semantic(message) => {
                write!(formatter, "Unexpected response: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Resolves a user-facing message: server-supplied `detail` first, then
    /// the local validation text, then the provided fallback.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http { body, .. } => {
                detail_message(body).unwrap_or_else(|| fallback.to_string())
            }
            AppError::Validation(message) | AppError::Config(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401, .. })
    }
}

/// Extracts the `detail` field from an error body. A string detail is used
/// verbatim; a validation list renders each entry as `"field: reason"`
/// joined by `", "`.
pub fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .filter_map(|entry| {
                    let reason = entry.get("msg")?.as_str()?;
                    let field = entry
                        .get("loc")
                        .and_then(|loc| loc.get(1))
                        .and_then(|field| field.as_str())
                        .unwrap_or("field");
                    Some(format!("{field}: {reason}"))
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

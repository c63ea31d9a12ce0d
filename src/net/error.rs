//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthorized` is promoted to a process-wide policy by the `api` module
//! (session teardown + redirect); every other variant is surfaced inline at
//! the view that made the call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Rejected credentials on an authenticated call.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// Malformed input; the payload is the server-provided detail message.
    #[error("{0}")]
    BadRequest(String),
    /// Any other non-success HTTP status.
    #[error("request failed ({status}): {detail}")]
    Http { status: u16, detail: String },
    /// Could not reach the API at all.
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success status and extracted detail to a variant.
    pub fn from_status(status: u16, detail: String) -> ApiError {
        match status {
            401 => ApiError::Unauthorized,
            400 | 422 => ApiError::BadRequest(detail),
            _ => ApiError::Http { status, detail },
        }
    }

    /// Extract the `{"detail": ...}` message the API attaches to failures.
    /// Falls back to the given text when the body is not shaped that way.
    pub fn detail_from_body(body: &str, fallback: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail")?.as_str().map(str::to_owned))
            .unwrap_or_else(|| fallback.to_owned())
    }
}

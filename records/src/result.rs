//! Uniform result taxonomy for everything that talks to the backend.
//!
//! ERROR HANDLING
//! ==============
//! Historically the dashboard mixed thrown exceptions with ad-hoc
//! `{success, message}` objects. Here every HTTP interaction classifies its
//! failure as one `FetchError` variant, and anything user-facing collapses
//! into an `ActionResult` at the display boundary. Nothing deeper in the
//! stack throws.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use serde::{Deserialize, Serialize};

/// Why a backend interaction failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status. `message` is the body's
    /// `message` field when one was present.
    #[error("server rejected request ({status}): {message}")]
    Http { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Client-side validation rejected the payload before any request.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl FetchError {
    /// The message a banner should show for this failure.
    #[must_use]
    pub fn banner_message(&self) -> String {
        match self {
            Self::Http { message, .. } => format!("Error: {message}"),
            Self::Network(msg) | Self::Decode(msg) => format!("Error: {msg}"),
            Self::Validation(msg) => msg.clone(),
        }
    }
}

/// The uniform outcome shape of the shared action layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

impl From<FetchError> for ActionResult {
    fn from(err: FetchError) -> Self {
        let message = match err {
            FetchError::Http { message, .. } => message,
            FetchError::Network(msg) | FetchError::Decode(msg) | FetchError::Validation(msg) => {
                msg
            }
        };
        Self::err(message)
    }
}

/// Pull the `message` field out of an error body, falling back to a generic
/// description. Backends here reply `{"message": "..."}` on failure, but a
/// proxy in between may substitute an HTML page or empty body.
#[must_use]
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| fallback.to_owned())
}

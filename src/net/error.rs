#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// User-facing fallback when the server gives nothing quotable.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// User-facing message for transport-level failures (no response at all).
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Failure classification for backend calls.
///
/// The three variants are produced by the transport layer itself, so
/// callers never inspect response shapes to tell "no response" apart from
/// "rejected" or "unusable payload".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, abort).
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status; `body` is the raw text.
    #[error("server rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
    /// A 2xx response whose payload could not be used.
    #[error("unusable response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => NETWORK_MESSAGE.to_owned(),
            Self::Rejected { body, .. } => rejected_message(body),
            Self::Decode(_) => GENERIC_MESSAGE.to_owned(),
        }
    }
}

/// Pick the most specific message out of a rejection body.
///
/// Order: `error`, then `message`, then the first element of any
/// array-valued field (per-field validation errors like
/// `{"email": ["..."]}`), then a bare string body, then the generic
/// fallback.
fn rejected_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(serde_json::Value::as_str) {
                return msg.to_owned();
            }
        }
        if let Some(fields) = value.as_object() {
            for field in fields.values() {
                let first = field
                    .as_array()
                    .and_then(|items| items.first())
                    .and_then(serde_json::Value::as_str);
                if let Some(msg) = first {
                    return msg.to_owned();
                }
            }
        }
        if let Some(msg) = value.as_str() {
            return msg.to_owned();
        }
    } else if !body.trim().is_empty() {
        return body.trim().to_owned();
    }
    GENERIC_MESSAGE.to_owned()
}

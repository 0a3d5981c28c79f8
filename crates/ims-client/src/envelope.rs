//! The JSON envelope every API response is wrapped in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ims_core::error::AppError;

/// Status value the API uses for success.
pub const STATUS_OK: u16 = 200;

/// `{ status, message, ...payload }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application-level status code.
    #[serde(default)]
    pub status: Option<u16>,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
    /// Remaining fields (`products`, `categories`, `token`, ...).
    #[serde(flatten)]
    pub payload: T,
}

/// Validate a decoded body and hand back the payload value.
///
/// A body without a `status` field (or with `status: null`) is accepted;
/// the HTTP status already said success. Any other status than 200 is a
/// failure carrying the envelope's message, or `fallback` when there is
/// none. A status that is not a number is a failure too.
pub fn check(body: Value, fallback: &str) -> Result<Value, AppError> {
    match body.get("status") {
        None | Some(Value::Null) => Ok(body),
        Some(status) => match status.as_u64() {
            Some(code) if code == u64::from(STATUS_OK) => Ok(body),
            Some(code) => Err(AppError::remote(error_message(&body, fallback, Some(code)))),
            None => Err(AppError::remote(format!(
                "{fallback} (unrecognized status {status})"
            ))),
        },
    }
}

/// Pull a user-facing message out of an error body.
pub fn error_message(body: &Value, fallback: &str, status: Option<u64>) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .unwrap_or_else(|| match status {
            Some(code) => format!("{fallback} (status {code})"),
            None => fallback.to_string(),
        })
}

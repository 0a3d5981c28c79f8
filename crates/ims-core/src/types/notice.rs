//! Transient user-facing messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Confirmation of a completed action.
    Info,
    /// A remote call or local action failed.
    Error,
}

/// A message shown to the user until it auto-dismisses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Monotonic sequence number assigned by the notice center.
    pub seq: u64,
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown to the user.
    pub message: String,
    /// When the notice was raised.
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    /// Create a notice stamped with the current time.
    pub fn new(seq: u64, level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            seq,
            level,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}

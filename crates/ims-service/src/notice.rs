//! Transient, auto-dismissing user messages.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info};

use ims_core::config::NoticeConfig;
use ims_core::types::{Notice, NoticeLevel};

/// Holds at most one visible message.
///
/// A newer message replaces the current one. Each message dismisses itself
/// after the configured time-to-live unless it has already been replaced.
#[derive(Debug, Clone)]
pub struct NoticeCenter {
    /// Current message, observable by any number of subscribers.
    tx: Arc<watch::Sender<Option<Notice>>>,
    /// Sequence source for raised notices.
    seq: Arc<AtomicU64>,
    /// Visible duration.
    ttl: Duration,
}

impl NoticeCenter {
    /// Creates a notice center from configuration.
    pub fn new(config: &NoticeConfig) -> Self {
        Self::with_ttl(Duration::from_millis(config.ttl_ms))
    }

    /// Creates a notice center with an explicit time-to-live.
    pub fn with_ttl(ttl: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx: Arc::new(tx),
            seq: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Show a confirmation message.
    pub fn info(&self, message: impl Into<String>) -> u64 {
        let message = message.into();
        info!(notice = %message, "Notice raised");
        self.raise(NoticeLevel::Info, message)
    }

    /// Show a failure message.
    pub fn error(&self, message: impl Into<String>) -> u64 {
        let message = message.into();
        error!(notice = %message, "Error notice raised");
        self.raise(NoticeLevel::Error, message)
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<Notice> {
        self.tx.borrow().clone()
    }

    /// Watch the visible message.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.tx.subscribe()
    }

    /// Hide the visible message immediately.
    pub fn dismiss(&self) {
        self.tx.send_replace(None);
    }

    fn raise(&self, level: NoticeLevel, message: String) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_replace(Some(Notice::new(seq, level, message)));

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = Arc::clone(&self.tx);
                let ttl = self.ttl;
                handle.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    tx.send_if_modified(|current| {
                        if current.as_ref().is_some_and(|n| n.seq == seq) {
                            *current = None;
                            true
                        } else {
                            false
                        }
                    });
                });
            }
            Err(_) => debug!(seq, "No runtime; notice will not auto-dismiss"),
        }
        seq
    }
}

//! Optimistic reordering with asynchronous persistence and rollback.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use ims_auth::rbac::{Permission, RbacEnforcer};
use ims_auth::session::SessionState;
use ims_core::config::RollbackPolicy;
use ims_core::error::AppError;
use ims_core::result::AppResult;
use ims_core::traits::remote::RemoteCollection;
use ims_core::types::PositionUpdate;
use ims_entity::Orderable;

use super::ordered::OrderedCollection;
use super::window::ViewWindow;
use crate::notice::NoticeCenter;

/// Static settings for one controller.
#[derive(Debug, Clone)]
pub struct CollectionSettings {
    /// Name used in log lines, e.g. `"category"`.
    pub label: &'static str,
    /// Items per page.
    pub page_size: usize,
    /// Permission a reorder requires.
    pub reorder_permission: Permission,
    /// Reconciliation strategy for failed reorders.
    pub rollback: RollbackPolicy,
    /// Message shown when a reorder fails without a server message.
    pub save_failed: &'static str,
    /// Message shown when loading fails without a server message.
    pub load_failed: &'static str,
}

/// How a reorder ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Source and target were the same; nothing was sent.
    Unchanged,
    /// The remote store accepted the new order.
    Persisted,
    /// The remote store refused; the pre-reorder snapshot was restored.
    RolledBack {
        /// Message shown to the user.
        message: String,
    },
    /// The remote store refused after a later mutation; the collection is
    /// re-fetched, after the last in-flight reorder settles, instead of
    /// restoring a stale snapshot.
    Resynced {
        /// Message shown to the user.
        message: String,
    },
}

/// Tracks one reorder's persistence.
///
/// Dropping the handle does not cancel persistence.
#[derive(Debug)]
pub struct ReorderHandle {
    revision: u64,
    rx: Option<oneshot::Receiver<ReorderOutcome>>,
}

impl ReorderHandle {
    fn settled_now(revision: u64) -> Self {
        Self { revision, rx: None }
    }

    /// Collection revision right after the optimistic move.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Wait for the remote store's answer and the resulting reconciliation.
    pub async fn settled(self) -> AppResult<ReorderOutcome> {
        match self.rx {
            None => Ok(ReorderOutcome::Unchanged),
            Some(rx) => rx
                .await
                .map_err(|_| AppError::internal("Reorder persistence task ended without a result")),
        }
    }
}

/// Persistence calls still running, and whether a re-fetch waits on them.
#[derive(Debug, Default)]
struct InFlight {
    pending: usize,
    resync: bool,
}

/// Owns one ordered collection and keeps it in step with the remote store.
pub struct CollectionController<T: Orderable, R: RemoteCollection<T>> {
    state: Arc<Mutex<OrderedCollection<T>>>,
    in_flight: Arc<Mutex<InFlight>>,
    remote: Arc<R>,
    session: SessionState,
    rbac: Arc<RbacEnforcer>,
    notices: NoticeCenter,
    settings: Arc<CollectionSettings>,
}

impl<T: Orderable, R: RemoteCollection<T>> Clone for CollectionController<T, R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            in_flight: Arc::clone(&self.in_flight),
            remote: Arc::clone(&self.remote),
            session: self.session.clone(),
            rbac: Arc::clone(&self.rbac),
            notices: self.notices.clone(),
            settings: Arc::clone(&self.settings),
        }
    }
}

impl<T: Orderable, R: RemoteCollection<T>> fmt::Debug for CollectionController<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionController")
            .field("label", &self.settings.label)
            .field("len", &self.state.lock().len())
            .finish()
    }
}

impl<T: Orderable, R: RemoteCollection<T>> CollectionController<T, R> {
    /// Creates an empty controller.
    pub fn new(
        remote: Arc<R>,
        session: SessionState,
        rbac: Arc<RbacEnforcer>,
        notices: NoticeCenter,
        settings: CollectionSettings,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(OrderedCollection::new(settings.page_size))),
            in_flight: Arc::new(Mutex::new(InFlight::default())),
            remote,
            session,
            rbac,
            notices,
            settings: Arc::new(settings),
        }
    }

    /// Replace the collection with already fetched items.
    pub fn load(&self, items: Vec<T>) {
        self.state.lock().load(items);
    }

    /// Re-fetch the collection from the remote store.
    ///
    /// On failure the current collection is kept and an error notice shown.
    pub async fn refresh(&self) -> AppResult<usize> {
        match self.remote.fetch_all().await {
            Ok(items) => {
                let count = items.len();
                self.state.lock().load(items);
                debug!(collection = self.settings.label, count, "Collection loaded");
                Ok(count)
            }
            Err(e) => {
                self.notices.error(e.user_message(self.settings.load_failed));
                Err(e)
            }
        }
    }

    /// Change the search text; the window goes back to page 1.
    pub fn set_search(&self, raw: &str) -> ViewWindow<T> {
        let mut state = self.state.lock();
        state.set_search(raw);
        state.window().clone()
    }

    /// Change the page using the cached collection.
    pub fn set_page(&self, page: usize) -> ViewWindow<T> {
        let mut state = self.state.lock();
        state.set_page(page);
        state.window().clone()
    }

    /// The current window.
    pub fn window(&self) -> ViewWindow<T> {
        self.state.lock().window().clone()
    }

    /// The full collection in local order.
    pub fn items(&self) -> Vec<T> {
        self.state.lock().snapshot()
    }

    /// Mutation counter of the underlying collection.
    pub fn revision(&self) -> u64 {
        self.state.lock().revision()
    }

    /// Move the item at full-collection index `from` to `to`.
    ///
    /// The local order and window change before this returns; persistence
    /// runs in the background and is reported through the handle. Must be
    /// called from within a tokio runtime; outside one this fails with an
    /// `Internal` error and leaves the collection untouched.
    pub fn reorder(&self, from: usize, to: usize) -> AppResult<ReorderHandle> {
        self.apply(|state| state.move_item(from, to))
    }

    /// Move using indices relative to the current page of the window.
    ///
    /// Items hidden by the search keep their full-collection slots.
    pub fn reorder_in_view(&self, from: usize, to: usize) -> AppResult<ReorderHandle> {
        self.apply(|state| state.move_in_view(from, to))
    }

    fn apply<F>(&self, mutate: F) -> AppResult<ReorderHandle>
    where
        F: FnOnce(&mut OrderedCollection<T>) -> AppResult<()>,
    {
        self.rbac
            .require_for_session(&self.session, self.settings.reorder_permission)?;
        let runtime = Handle::try_current()
            .map_err(|_| AppError::internal("Reordering requires a running async runtime"))?;

        let (snapshot, positions, revision) = {
            let mut state = self.state.lock();
            let snapshot = state.snapshot();
            let before = state.revision();
            mutate(&mut state)?;
            if state.revision() == before {
                return Ok(ReorderHandle::settled_now(before));
            }
            state.assign_positions();
            self.in_flight.lock().pending += 1;
            (snapshot, state.positions(), state.revision())
        };

        debug!(
            collection = self.settings.label,
            revision,
            items = positions.len(),
            "Optimistic reorder applied"
        );

        let (tx, rx) = oneshot::channel();
        let task = self.clone();
        runtime.spawn(async move {
            let outcome = task.persist(snapshot, positions, revision).await;
            let outcome = task.settle(outcome).await;
            let _ = tx.send(outcome);
        });

        Ok(ReorderHandle {
            revision,
            rx: Some(rx),
        })
    }

    async fn persist(
        &self,
        snapshot: Vec<T>,
        positions: Vec<PositionUpdate>,
        revision: u64,
    ) -> ReorderOutcome {
        let label = self.settings.label;
        let err = match self.remote.save_order(positions).await {
            Ok(()) => {
                info!(collection = label, revision, "Order saved");
                return ReorderOutcome::Persisted;
            }
            Err(e) => e,
        };

        let message = err.user_message(self.settings.save_failed);
        warn!(collection = label, revision, error = %err, "Saving order failed");

        let restored = {
            let mut state = self.state.lock();
            match self.settings.rollback {
                RollbackPolicy::Snapshot => {
                    state.restore(snapshot);
                    true
                }
                RollbackPolicy::Sequenced if state.revision() == revision => {
                    state.restore(snapshot);
                    true
                }
                RollbackPolicy::Sequenced => false,
            }
        };

        self.notices.error(message.clone());
        if restored {
            debug!(collection = label, revision, "Snapshot restored");
            return ReorderOutcome::RolledBack { message };
        }

        debug!(collection = label, revision, "Later mutation present; re-fetch scheduled");
        self.in_flight.lock().resync = true;
        ReorderOutcome::Resynced { message }
    }

    /// Account for one finished persistence call.
    ///
    /// A scheduled re-fetch runs once the last in-flight reorder has
    /// settled, so it sees every order the remote store accepted. A
    /// rollback that triggered the re-fetch reports `Resynced`.
    async fn settle(&self, outcome: ReorderOutcome) -> ReorderOutcome {
        let label = self.settings.label;
        let due = {
            let mut in_flight = self.in_flight.lock();
            in_flight.pending = in_flight.pending.saturating_sub(1);
            let due = in_flight.pending == 0 && in_flight.resync;
            if due {
                in_flight.resync = false;
            }
            due
        };
        if !due {
            return outcome;
        }

        let before = self.revision();
        match self.remote.fetch_all().await {
            Ok(items) => {
                let mut state = self.state.lock();
                if state.revision() == before {
                    state.load(items);
                    debug!(collection = label, "Collection re-fetched after failed reorder");
                } else {
                    // A reorder started meanwhile; its own settlement re-fetches.
                    let mut in_flight = self.in_flight.lock();
                    in_flight.resync = in_flight.pending > 0;
                }
            }
            Err(e) => warn!(collection = label, error = %e, "Re-fetch after failed reorder failed"),
        }

        match outcome {
            ReorderOutcome::RolledBack { message } => ReorderOutcome::Resynced { message },
            other => other,
        }
    }
}

//! Observable holder of the current [`SessionState`].
//!
//! The state lives in a watch channel next to the epoch that produced it
//! and an `open` flag. Every guarded write checks both inside the channel's
//! write lock, so a result computed under an older epoch, or after the store
//! was closed, can never land.

use em_core::SessionState;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
struct Slot {
    epoch: u64,
    open: bool,
    state: SessionState,
}

#[derive(Debug)]
struct Inner {
    slot: watch::Sender<Slot>,
    writes: AtomicU64,
}

/// Cloneable handle; all clones share one store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Open store in `Unknown` at epoch 0.
    pub fn new() -> Self {
        let (slot, _) = watch::channel(Slot {
            open: true,
            ..Slot::default()
        });
        Self {
            inner: Arc::new(Inner {
                slot,
                writes: AtomicU64::new(0),
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.slot.borrow().state.clone()
    }

    pub fn epoch(&self) -> u64 {
        self.inner.slot.borrow().epoch
    }

    pub fn is_open(&self) -> bool {
        self.inner.slot.borrow().open
    }

    /// Number of state writes applied so far.
    pub fn write_count(&self) -> u64 {
        self.inner.writes.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> SessionWatch {
        SessionWatch {
            receiver: self.inner.slot.subscribe(),
        }
    }

    /// Start a new intent: bump the epoch and set the state it implies.
    ///
    /// Returns the new epoch, or `None` once the store is closed.
    pub fn begin_intent(&self, update: impl FnOnce(&mut SessionState)) -> Option<u64> {
        let writes = &self.inner.writes;
        let mut started = None;
        self.inner.slot.send_if_modified(|slot| {
            if !slot.open {
                return false;
            }
            slot.epoch += 1;
            update(&mut slot.state);
            writes.fetch_add(1, Ordering::SeqCst);
            started = Some(slot.epoch);
            true
        });
        started
    }

    /// Apply a background result if `epoch` is still current and the store
    /// is open. `update` returns whether it changed anything.
    pub fn apply_if_current(
        &self,
        epoch: u64,
        update: impl FnOnce(&mut SessionState) -> bool,
    ) -> bool {
        let writes = &self.inner.writes;
        self.inner.slot.send_if_modified(|slot| {
            if !slot.open || slot.epoch != epoch {
                return false;
            }
            let changed = update(&mut slot.state);
            if changed {
                writes.fetch_add(1, Ordering::SeqCst);
            }
            changed
        })
    }

    /// Stop accepting writes. Idempotent.
    pub fn close(&self) {
        self.inner.slot.send_if_modified(|slot| {
            slot.open = false;
            false
        });
    }
}

/// Read side of a [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SessionWatch {
    receiver: watch::Receiver<Slot>,
}

impl SessionWatch {
    pub fn current(&self) -> SessionState {
        self.receiver.borrow().state.clone()
    }

    /// Wait for the next write. `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }

    /// Wait until `predicate` holds for the state, up to `timeout`.
    pub async fn wait_for(
        &mut self,
        timeout: Duration,
        mut predicate: impl FnMut(&SessionState) -> bool,
    ) -> Option<SessionState> {
        let waited = tokio::time::timeout(
            timeout,
            self.receiver.wait_for(|slot| predicate(&slot.state)),
        )
        .await;
        match waited {
            Ok(Ok(slot)) => Some(slot.state.clone()),
            _ => None,
        }
    }
}

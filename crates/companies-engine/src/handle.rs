//! Shared handle to a coordinator.
//!
//! The loader and the presentation layer both need the coordinator. The
//! handle serializes their access so a transition always completes before
//! the next one starts.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use companies_core::ViewOptions;

use crate::coordinator::ViewCoordinator;
use crate::snapshot::ViewSnapshot;

/// Cloneable, thread-safe handle to one session's coordinator.
#[derive(Clone)]
pub struct DirectoryHandle {
    inner: Arc<Mutex<ViewCoordinator>>,
    rx: watch::Receiver<ViewSnapshot>,
}

impl DirectoryHandle {
    /// Wrap an existing coordinator.
    pub fn new(coordinator: ViewCoordinator) -> Self {
        let rx = coordinator.subscribe();
        Self {
            inner: Arc::new(Mutex::new(coordinator)),
            rx,
        }
    }

    /// Start a new session in the loading phase.
    pub fn loading(options: ViewOptions) -> Self {
        Self::new(ViewCoordinator::new(options))
    }

    /// Run one transition with exclusive access.
    pub fn update<R>(&self, f: impl FnOnce(&mut ViewCoordinator) -> R) -> R {
        let mut coordinator = self.inner.lock();
        f(&mut coordinator)
    }

    /// Read coordinator state.
    pub fn read<R>(&self, f: impl FnOnce(&ViewCoordinator) -> R) -> R {
        let coordinator = self.inner.lock();
        f(&coordinator)
    }

    /// Latest published snapshot. Does not take the coordinator lock.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.rx.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.rx.clone()
    }
}

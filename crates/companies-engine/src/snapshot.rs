//! Derived view handed to the presentation layer.

use serde::Serialize;
use tokio::sync::watch;

use companies_core::{FilterState, Record, SortKey};

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    /// Records on the current page, in display order.
    pub page_items: Vec<Record>,

    /// Records matching the filters, before pagination.
    pub match_count: usize,

    /// Page count, at least one.
    pub total_pages: usize,

    /// Effective 1-based page number.
    pub current_page: usize,

    /// True until the record source resolves.
    pub loading: bool,

    /// Load failure message, if the source failed.
    pub error: Option<String>,

    /// Whether "Prev" is enabled.
    pub has_prev: bool,

    /// Whether "Next" is enabled.
    pub has_next: bool,

    /// Active filters, echoed back into the controls.
    pub filter: FilterState,

    /// Active sort key.
    pub sort: SortKey,

    /// Active page size.
    pub page_size: usize,
}

impl ViewSnapshot {
    /// Snapshot shown while the record source is pending.
    pub fn loading(page_size: usize) -> Self {
        Self {
            page_items: Vec::new(),
            match_count: 0,
            total_pages: 1,
            current_page: 1,
            loading: true,
            error: None,
            has_prev: false,
            has_next: false,
            filter: FilterState::default(),
            sort: SortKey::default(),
            page_size,
        }
    }

    /// Whether the current page has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }
}

// =============================================================================
// Snapshot Broadcast
// =============================================================================

/// Publishes snapshots to subscribers.
///
/// Publishing is the only way to change the current snapshot, so every
/// completed transition is observed by subscribers.
pub struct SnapshotBroadcast {
    tx: watch::Sender<ViewSnapshot>,
    rx: watch::Receiver<ViewSnapshot>,
}

impl SnapshotBroadcast {
    /// Create a broadcast seeded with `initial`.
    pub fn new(initial: ViewSnapshot) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self { tx, rx }
    }

    /// Replace the current snapshot and notify subscribers.
    pub fn publish(&self, snapshot: ViewSnapshot) {
        tracing::debug!(
            "Publishing snapshot: page {}/{}, {} matches",
            snapshot.current_page,
            snapshot.total_pages,
            snapshot.match_count
        );
        self.tx.send_replace(snapshot);
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.rx.clone()
    }

    /// Borrow the current snapshot.
    pub fn current(&self) -> watch::Ref<'_, ViewSnapshot> {
        self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_subscribers() {
        let broadcast = SnapshotBroadcast::new(ViewSnapshot::loading(9));
        let mut rx = broadcast.subscribe();
        assert!(rx.borrow().loading);

        let mut next = ViewSnapshot::loading(9);
        next.loading = false;
        next.match_count = 3;
        broadcast.publish(next);

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update();
        assert!(!seen.loading);
        assert_eq!(seen.match_count, 3);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let broadcast = SnapshotBroadcast::new(ViewSnapshot::loading(6));
        broadcast.publish(ViewSnapshot::loading(12));
        assert_eq!(broadcast.current().page_size, 12);
    }
}

//! View-State Coordinator
//!
//! The coordinator owns the mutable filter, sort and page state and is the
//! only writer in the pipeline. Every transition runs to completion:
//!
//! ```text
//!  set_query / set_location / set_industry     next_page / prev_page
//!  set_sort / set_page_size / clear_filters    set_page / first / last
//!              │                                       │
//!              ▼                                       │
//!       page_number = 1                                │
//!              │                                       │
//!              └──────────────┬────────────────────────┘
//!                             ▼
//!          filter (memo) ─▶ sort (memo) ─▶ paginate
//!                             │
//!                             ▼
//!            clamp page_number, publish ViewSnapshot
//! ```
//!
//! Filter and sort results are memoized on their inputs, so page-only
//! transitions re-run pagination alone.

use tokio::sync::watch;

use companies_core::{
    DirectoryError, DirectoryResult, FilterState, PageState, Record, SortKey, ViewOptions,
};

use crate::memo::Memo;
use crate::snapshot::{SnapshotBroadcast, ViewSnapshot};
use crate::stages;
use crate::store::RecordStore;

// =============================================================================
// Session Phase
// =============================================================================

/// Lifecycle of the record collection for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the record source. Transitions are denied.
    Loading,
    /// Records installed.
    Ready,
    /// The source failed. The store stays empty for the rest of the session.
    Failed { error: DirectoryError },
}

impl SessionPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionPhase::Loading)
    }

    /// The load failure, if any.
    pub fn error(&self) -> Option<&DirectoryError> {
        match self {
            SessionPhase::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// How often each stage has actually run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivationStats {
    pub filter_runs: u64,
    pub sort_runs: u64,
    pub paginate_runs: u64,
}

// =============================================================================
// View Coordinator
// =============================================================================

/// Owns view state and drives recomputation of the derived view.
pub struct ViewCoordinator {
    options: ViewOptions,
    phase: SessionPhase,
    store: RecordStore,

    filter: FilterState,
    sort: SortKey,
    page: PageState,

    filtered: Memo<FilterState, Vec<Record>>,
    ordered: Memo<(FilterState, SortKey), Vec<Record>>,
    paginate_runs: u64,

    broadcast: SnapshotBroadcast,
}

impl ViewCoordinator {
    /// Start a session waiting for the record source.
    pub fn new(options: ViewOptions) -> Self {
        let page = PageState::first(options.default_page_size);
        Self {
            broadcast: SnapshotBroadcast::new(ViewSnapshot::loading(page.page_size)),
            options,
            phase: SessionPhase::Loading,
            store: RecordStore::default(),
            filter: FilterState::default(),
            sort: SortKey::default(),
            page,
            filtered: Memo::new(),
            ordered: Memo::new(),
            paginate_runs: 0,
        }
    }

    /// Start a session with records already available.
    pub fn with_records(options: ViewOptions, records: Vec<Record>) -> DirectoryResult<Self> {
        let mut coordinator = Self::new(options);
        coordinator.finish_loading(records)?;
        Ok(coordinator)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Install the loaded records and compute the first view.
    pub fn finish_loading(&mut self, records: Vec<Record>) -> DirectoryResult<()> {
        self.ensure_loading()?;
        tracing::info!("Loaded {} records", records.len());
        self.store = RecordStore::new(records);
        self.phase = SessionPhase::Ready;
        self.install()
    }

    /// Record a load failure. The session keeps an empty store.
    ///
    /// Source errors arrive here as [`DirectoryError::LoadFailure`].
    pub fn fail_loading(&mut self, error: impl Into<DirectoryError>) -> DirectoryResult<()> {
        self.ensure_loading()?;
        let error = error.into();
        tracing::error!("{}", error);
        self.store = RecordStore::default();
        self.phase = SessionPhase::Failed { error };
        self.install()
    }

    fn ensure_loading(&self) -> DirectoryResult<()> {
        if self.phase.is_loading() {
            Ok(())
        } else {
            Err(DirectoryError::InvalidArgument(
                "records were already loaded for this session".to_string(),
            ))
        }
    }

    fn install(&mut self) -> DirectoryResult<()> {
        self.filtered.invalidate();
        self.ordered.invalidate();
        self.recompute()
    }

    // =========================================================================
    // Filter and Sort Transitions (reset to page 1)
    // =========================================================================

    /// Set the free-text name query.
    pub fn set_query(&mut self, query: impl Into<String>) -> DirectoryResult<()> {
        self.ensure_ready()?;
        let query = query.into();
        if query == self.filter.query {
            return Ok(());
        }
        tracing::debug!("set_query({:?})", query);
        self.filter.query = query;
        self.reset_and_recompute()
    }

    /// Set or clear the location facet. Empty clears.
    pub fn set_location(&mut self, location: Option<String>) -> DirectoryResult<()> {
        self.ensure_ready()?;
        let mut next = self.filter.clone();
        next.set_location(location);
        self.replace_filter(next)
    }

    /// Set or clear the industry facet. Empty clears.
    pub fn set_industry(&mut self, industry: Option<String>) -> DirectoryResult<()> {
        self.ensure_ready()?;
        let mut next = self.filter.clone();
        next.set_industry(industry);
        self.replace_filter(next)
    }

    fn replace_filter(&mut self, next: FilterState) -> DirectoryResult<()> {
        if next == self.filter {
            return Ok(());
        }
        tracing::debug!(
            "Facets changed: location={:?} industry={:?}",
            next.location,
            next.industry
        );
        self.filter = next;
        self.reset_and_recompute()
    }

    /// Set the sort key.
    pub fn set_sort(&mut self, key: SortKey) -> DirectoryResult<()> {
        self.ensure_ready()?;
        if key == self.sort {
            return Ok(());
        }
        tracing::debug!("set_sort({})", key);
        self.sort = key;
        self.reset_and_recompute()
    }

    /// Set the sort key from its identifier, e.g. `name-desc`.
    pub fn set_sort_key_str(&mut self, key: &str) -> DirectoryResult<()> {
        self.ensure_ready()?;
        let key = key.parse::<SortKey>().inspect_err(|e| {
            tracing::warn!("Rejected sort key: {}", e);
        })?;
        self.set_sort(key)
    }

    /// Set the page size. Must be one of the configured choices.
    pub fn set_page_size(&mut self, page_size: usize) -> DirectoryResult<()> {
        self.ensure_ready()?;
        if !self.options.allows_page_size(page_size) {
            tracing::warn!("Rejected page size {}", page_size);
            return Err(DirectoryError::InvalidArgument(format!(
                "page size {} is not one of {:?}",
                page_size, self.options.page_sizes
            )));
        }
        if page_size == self.page.page_size {
            return Ok(());
        }
        tracing::debug!("set_page_size({})", page_size);
        self.page.page_size = page_size;
        self.reset_and_recompute()
    }

    /// Reset query, facets, sort and page state to the session defaults.
    ///
    /// One state transition and one recomputation.
    pub fn clear_filters(&mut self) -> DirectoryResult<()> {
        self.ensure_ready()?;
        tracing::debug!("clear_filters()");
        self.filter = FilterState::default();
        self.sort = SortKey::default();
        self.page = PageState::first(self.options.default_page_size);
        self.recompute()
    }

    fn reset_and_recompute(&mut self) -> DirectoryResult<()> {
        self.page.page_number = 1;
        self.recompute()
    }

    // =========================================================================
    // Page Transitions (pagination only)
    // =========================================================================

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self) -> DirectoryResult<()> {
        self.ensure_ready()?;
        self.page.page_number = self.page.page_number.saturating_add(1);
        self.recompute()
    }

    /// Go back one page. No-op on the first page.
    pub fn prev_page(&mut self) -> DirectoryResult<()> {
        self.ensure_ready()?;
        self.page.page_number = self.page.page_number.saturating_sub(1).max(1);
        self.recompute()
    }

    /// Jump to a page, clamped into the valid range.
    pub fn set_page(&mut self, page_number: usize) -> DirectoryResult<()> {
        self.ensure_ready()?;
        self.page.page_number = page_number.max(1);
        self.recompute()
    }

    pub fn first_page(&mut self) -> DirectoryResult<()> {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> DirectoryResult<()> {
        self.set_page(usize::MAX)
    }

    fn ensure_ready(&self) -> DirectoryResult<()> {
        if self.phase.is_loading() {
            Err(DirectoryError::Loading)
        } else {
            Ok(())
        }
    }

    // =========================================================================
    // Recomputation
    // =========================================================================

    /// Run the pipeline, clamp the page number and publish the result.
    fn recompute(&mut self) -> DirectoryResult<()> {
        let records = self.store.records();
        let filter_key = self.filter.clone();
        let sort = self.sort;

        let filtered = self
            .filtered
            .get_or_compute(&filter_key, || stages::filter(&records, &filter_key));
        let ordered = self
            .ordered
            .get_or_compute(&(filter_key.clone(), sort), || stages::sort(filtered, sort));

        let page = stages::paginate(ordered, self.page.page_size, self.page.page_number)?;
        self.paginate_runs += 1;

        let snapshot = ViewSnapshot {
            page_items: page.items.to_vec(),
            match_count: ordered.len(),
            total_pages: page.total_pages,
            current_page: page.page_number,
            loading: false,
            error: self.phase.error().map(ToString::to_string),
            has_prev: page.page_number > 1,
            has_next: page.page_number < page.total_pages,
            filter: filter_key,
            sort,
            page_size: self.page.page_size,
        };

        self.page.page_number = snapshot.current_page;
        self.broadcast.publish(snapshot);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current derived view.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.broadcast.current().clone()
    }

    /// Subscribe to derived view changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.broadcast.subscribe()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Number of loaded records.
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    pub fn stats(&self) -> DerivationStats {
        DerivationStats {
            filter_runs: self.filtered.runs(),
            sort_runs: self.ordered.runs(),
            paginate_runs: self.paginate_runs,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

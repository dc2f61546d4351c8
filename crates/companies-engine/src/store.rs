//! Immutable record store.

use std::sync::Arc;

use companies_core::Record;

/// The loaded record collection, shared read-only with the stages.
///
/// Cloning is cheap; every clone points at the same records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<[Record]>,
}

impl RecordStore {
    /// Create a store from a loaded collection.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Shared handle to the records.
    pub fn records(&self) -> Arc<[Record]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

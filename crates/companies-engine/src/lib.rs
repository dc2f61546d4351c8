//! Derivation pipeline for the companies directory.
//!
//! This crate turns the loaded records plus the current view state into the
//! exact page to render:
//! - Pure filter, sort and pagination stages
//! - The view-state coordinator that owns all mutable state
//! - Snapshot broadcasting for the presentation layer

pub mod coordinator;
pub mod handle;
pub mod memo;
pub mod snapshot;
pub mod stages;
pub mod store;

// Re-export commonly used types
pub use coordinator::{DerivationStats, SessionPhase, ViewCoordinator};
pub use handle::DirectoryHandle;
pub use snapshot::{SnapshotBroadcast, ViewSnapshot};
pub use store::RecordStore;

// Re-export companies_core types for convenience
pub use companies_core::{
    DirectoryError, DirectoryResult, FilterState, PageState, Record, SortKey, ViewOptions,
};

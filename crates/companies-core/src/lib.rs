//! Core types for the companies directory.
//!
//! This crate contains shared data structures that are used across all crates:
//! - Record type for directory entries
//! - Filter, sort and page state
//! - Presentation options (facet lists, page sizes)
//! - Configuration types
//! - Error types

mod config;
mod error;
mod filter;
mod options;
mod page;
mod record;
mod sort;

pub use config::{
    config_dir, config_path, DirectoryConfig, FacetConfig, PagingConfig, SourceConfig,
};
pub use error::{ConfigError, DirectoryError, DirectoryResult, SourceError};
pub use filter::FilterState;
pub use options::{
    ViewOptions, DEFAULT_INDUSTRIES, DEFAULT_LOCATIONS, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES,
};
pub use page::PageState;
pub use record::Record;
pub use sort::SortKey;

//! Record sources for the companies directory.
//!
//! A record source is read exactly once per session. This crate provides:
//! - The `RecordSource` trait, mockable for testing
//! - A JSON file source and an in-memory source
//! - `load_session()`, which awaits the source and installs the result

mod loader;
mod source;

pub use loader::{load_session, DEFAULT_LOAD_TIMEOUT};
pub use source::{JsonFileSource, RecordSource, StaticSource};

//! Record source implementations.

use std::path::PathBuf;

use futures::future::BoxFuture;

use companies_core::{Record, SourceError};

/// A one-shot provider of the full record collection.
///
/// Returns futures so the caller decides how to drive them.
#[cfg_attr(test, mockall::automock)]
pub trait RecordSource: Send + Sync {
    /// Short description for logs, e.g. the file path.
    fn describe(&self) -> String;

    /// Read the whole collection.
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Record>, SourceError>>;
}

// =============================================================================
// JSON File Source
// =============================================================================

/// Reads a JSON array of records from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Record>, SourceError>> {
        let path = self.path.clone();

        Box::pin(async move {
            let bytes = tokio::fs::read(&path).await.map_err(|e| SourceError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            let records: Vec<Record> = serde_json::from_slice(&bytes)?;
            tracing::debug!("Parsed {} records from {:?}", records.len(), path);
            Ok(records)
        })
    }
}

// =============================================================================
// Static Source
// =============================================================================

/// Serves an in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Record>, SourceError>> {
        let records = self.records.clone();
        Box::pin(async move { Ok(records) })
    }
}

//! One-time session load.

use std::time::Duration;

use companies_core::{DirectoryError, DirectoryResult, SourceError};
use companies_engine::DirectoryHandle;

use crate::source::RecordSource;

/// Default upper bound for a load.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Await the source once and install the outcome into the session.
///
/// A source error or timeout is recorded as the session's
/// [`DirectoryError::LoadFailure`] and is not retried. The returned error only reports a session that was
/// already loaded.
pub async fn load_session(
    source: &dyn RecordSource,
    handle: &DirectoryHandle,
    timeout: Duration,
) -> DirectoryResult<()> {
    tracing::info!("Loading records from {}", source.describe());

    let outcome = match tokio::time::timeout(timeout, source.fetch()).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout { duration: timeout }),
    };

    match outcome {
        Ok(records) => handle.update(|c| c.finish_loading(records)),
        Err(e) => {
            tracing::warn!("Load from {} failed: {}", source.describe(), e);
            handle.update(|c| c.fail_loading(DirectoryError::from(e)))
        }
    }
}

//! Bounded calls into external stores.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::errors::DomainError;

/// Run a store call under `limit`
///
/// An elapsed timer becomes an internal error naming `operation`; errors
/// from the call itself pass through untouched.
pub(crate) async fn bounded<T, F>(limit: Duration, operation: &str, call: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, timeout_ms = limit.as_millis() as u64, "Store call timed out");
            Err(DomainError::internal(format!("{} timed out", operation)))
        }
    }
}

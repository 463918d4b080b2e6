//! Revocation store trait for blacklisted tokens.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainError;

/// Value stored under a revoked token
pub const BLACKLIST_MARKER: &str = "blacklisted";

/// Fast key-value store consulted on every token verification
///
/// Keys are raw token strings. Entries disappear when their TTL elapses;
/// nothing removes them explicitly.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key absent or expired
    /// * `Err(DomainError)` - Store failure
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store `value` under `key` for `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;
}

//! Redis-backed revocation store

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use taskhub_core::errors::DomainError;
use taskhub_core::repositories::RevocationStore;

use super::redis_client::RedisClient;

/// Revocation store keeping blacklisted tokens in Redis with a TTL
///
/// Keys are the raw token strings under the configured key prefix.
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, token: &str) -> String {
        self.client.config().make_key(token)
    }
}

/// Redis rejects a zero expiry, so sub-second TTLs round up
pub(crate) fn ttl_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.client.get(&self.key(key)).await?)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let seconds = ttl_seconds(ttl);
        self.client
            .set_with_expiry(&self.key(key), value, seconds)
            .await?;
        debug!(ttl_seconds = seconds, "Stored revocation marker");
        Ok(())
    }
}

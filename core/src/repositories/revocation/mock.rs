//! In-memory RevocationStore for tests

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::errors::DomainError;

use super::trait_::RevocationStore;

/// Mock revocation store with TTL expiry
///
/// Expiry follows tokio's clock so tests can pause and advance time.
#[derive(Clone, Default)]
pub struct MockRevocationStore {
    entries: Arc<RwLock<HashMap<String, (String, Instant)>>>,
    failing: Arc<AtomicBool>,
    failing_writes: Arc<AtomicBool>,
    failing_keys: Arc<RwLock<HashSet<String>>>,
    latency: Option<Duration>,
}

impl MockRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every subsequent call fail with an internal error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make only `set` fail, leaving reads working
    pub fn set_failing_writes(&self, failing: bool) {
        self.failing_writes.store(failing, Ordering::SeqCst);
    }

    /// Make reads of `key` fail while other keys keep working
    pub async fn fail_lookups_of(&self, key: &str) {
        self.failing_keys.write().await.insert(key.to_string());
    }

    /// Remaining TTL of a live key
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .map(|(_, deadline)| deadline.saturating_duration_since(Instant::now()))
            .filter(|remaining| !remaining.is_zero())
    }

    async fn simulate(&self) -> Result<(), DomainError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::internal("revocation store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.simulate().await?;
        if self.failing_keys.read().await.contains(key) {
            return Err(DomainError::internal("revocation store unavailable"));
        }
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|(_, deadline)| Instant::now() < *deadline)
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.simulate().await?;
        if self.failing_writes.load(Ordering::SeqCst) {
            return Err(DomainError::internal("revocation store is read-only"));
        }
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }
}

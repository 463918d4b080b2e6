//! Unit tests for mock revocation store

use std::time::Duration;

use crate::errors::DomainError;
use crate::repositories::revocation::{MockRevocationStore, RevocationStore, BLACKLIST_MARKER};

#[tokio::test]
async fn test_set_and_get() {
    let store = MockRevocationStore::new();

    assert_eq!(store.get("token").await.unwrap(), None);

    store
        .set("token", BLACKLIST_MARKER, Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(
        store.get("token").await.unwrap().as_deref(),
        Some(BLACKLIST_MARKER)
    );
    assert!(store.ttl("token").await.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire_after_ttl() {
    let store = MockRevocationStore::new();
    store
        .set("token", BLACKLIST_MARKER, Duration::from_secs(60))
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(59)).await;
    assert!(store.get("token").await.unwrap().is_some());

    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(store.get("token").await.unwrap().is_none());
    assert!(store.ttl("token").await.is_none());
}

#[tokio::test]
async fn test_failing_store() {
    let store = MockRevocationStore::new();
    store.set_failing(true);

    assert!(matches!(
        store.get("token").await,
        Err(DomainError::Internal { .. })
    ));
}

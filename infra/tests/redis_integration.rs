//! Integration tests for the Redis revocation store
//!
//! These tests require a running Redis instance.
//! Run with: cargo test -p taskhub_infra --test redis_integration -- --ignored

use std::sync::Arc;
use std::time::Duration;

use taskhub_core::domain::entities::token::{Principal, TokenType};
use taskhub_core::domain::entities::user::Role;
use taskhub_core::errors::{DomainError, TokenError};
use taskhub_core::repositories::RevocationStore;
use taskhub_core::services::token::{TokenService, TokenServiceConfig};
use taskhub_infra::cache::{CacheConfig, RedisClient, RedisRevocationStore};

async fn store() -> RedisRevocationStore {
    dotenvy::dotenv().ok();
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    let config = CacheConfig::new(url).with_prefix("taskhub-test");
    RedisRevocationStore::new(RedisClient::new(config).await.unwrap())
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_marker_round_trip_and_expiry() {
    let store = store().await;
    let key = format!("token-{}", uuid::Uuid::new_v4());

    assert_eq!(store.get(&key).await.unwrap(), None);

    store
        .set(&key, "blacklisted", Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(store.get(&key).await.unwrap().as_deref(), Some("blacklisted"));

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(store.get(&key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_blacklisted_token_rejected_through_redis() {
    let tokens = Arc::new(TokenService::new(
        store().await,
        TokenServiceConfig {
            jwt_secret: "integration-secret".to_string(),
            ..Default::default()
        },
    ));
    let principal = Principal {
        user_id: uuid::Uuid::new_v4().to_string(),
        email: "harry@hogwarts.edu".to_string(),
        role: Role::User,
    };

    let (token, _) = tokens.create_access_token(&principal).unwrap();
    assert!(tokens.verify_token(&token, TokenType::Access).await.is_ok());

    tokens.blacklist_access_token(&token).await.unwrap();

    let result = tokens.verify_token(&token, TokenType::Access).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Blacklisted))
    ));
}

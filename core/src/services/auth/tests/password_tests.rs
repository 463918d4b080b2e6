//! Unit tests for password hashing

use crate::services::auth::{hash_password, verify_password};

#[tokio::test]
async fn test_hash_and_verify() {
    let hash = hash_password("password", 4).await.unwrap();

    assert_ne!(hash, "password");
    assert!(verify_password("password", &hash).await.unwrap());
    assert!(!verify_password("Password", &hash).await.unwrap());
}

#[tokio::test]
async fn test_malformed_hash_is_error() {
    assert!(verify_password("password", "not-a-bcrypt-hash").await.is_err());
}

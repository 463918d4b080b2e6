//! bcrypt password hashing run off the async executor

use tracing::error;

use crate::errors::DomainError;

/// Hashes `password` with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| {
            error!(error = %e, "Failed to hash password");
            DomainError::internal("Failed to hash password")
        })
}

/// Checks `password` against a stored bcrypt hash
///
/// # Returns
///
/// * `Ok(true)` - Password matches
/// * `Ok(false)` - Password does not match
/// * `Err(DomainError::Internal)` - Stored hash is malformed
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, DomainError> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| {
            error!(error = %e, "Stored password hash is unreadable");
            DomainError::internal("Failed to verify password")
        })
}

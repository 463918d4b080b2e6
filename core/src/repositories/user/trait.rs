//! User repository trait defining the interface for identity persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations own the credential store's identity rows. Emails are
/// unique; `create` must reject a duplicate with
/// [`AuthError::UserAlreadyExists`](crate::errors::AuthError::UserAlreadyExists).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Arguments
    /// * `user` - The User entity to persist
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Duplicate email or store failure
    async fn create(&self, user: User) -> Result<User, DomainError>;
}

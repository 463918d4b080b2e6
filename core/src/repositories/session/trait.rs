//! Session repository trait defining the interface for session persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Repository trait for Session persistence operations
///
/// Each row backs exactly one refresh token and is keyed by that token's
/// JWT ID. Rows only ever move from unblocked to blocked.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    ///
    /// # Arguments
    /// * `session` - The Session entity to persist
    ///
    /// # Returns
    /// * `Ok(Session)` - The stored session
    /// * `Err(DomainError)` - Duplicate id or store failure
    async fn create_session(&self, session: Session) -> Result<Session, DomainError>;

    /// Find a session by id
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - Session found
    /// * `Ok(None)` - No session with that id
    /// * `Err(DomainError)` - Store failure
    async fn get_session_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError>;

    /// Replace a stored session
    async fn update_session(&self, session: Session) -> Result<Session, DomainError>;

    /// Mark a session blocked
    ///
    /// # Arguments
    /// * `id` - Session id
    /// * `blocked_at` - Time of the block
    ///
    /// # Returns
    /// * `Ok(true)` - Session was found and is now blocked
    /// * `Ok(false)` - Session not found
    /// * `Err(DomainError)` - Store failure
    async fn block_session_by_id(
        &self,
        id: Uuid,
        blocked_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Remove a session row
    ///
    /// # Returns
    /// * `Ok(true)` - Session was deleted
    /// * `Ok(false)` - Session not found
    /// * `Err(DomainError)` - Store failure
    async fn delete_session_by_id(&self, id: Uuid) -> Result<bool, DomainError>;
}

//! Session entity backing a refresh token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Durable record tracking a refresh token's validity and block state
///
/// A session moves `active -> blocked` exactly once and never back. Expiry is
/// not stored separately; it is derived by comparing `expires_at` with the
/// current time whenever the session is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Equal to the refresh token's JWT ID
    pub id: Uuid,

    /// Email of the owning user
    pub email: String,

    /// The signed refresh token string
    pub refresh_token: String,

    /// Equal to the refresh token's expiry
    pub expires_at: DateTime<Utc>,

    /// Set on logout or forced revocation
    pub is_blocked: bool,

    /// When the session was blocked
    pub blocked_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new active session
    ///
    /// # Arguments
    ///
    /// * `id` - The refresh token's JWT ID
    /// * `email` - Email of the owning user
    /// * `refresh_token` - The signed refresh token
    /// * `expires_at` - The refresh token's expiry
    pub fn new(id: Uuid, email: String, refresh_token: String, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            refresh_token,
            expires_at,
            is_blocked: false,
            blocked_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the session has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

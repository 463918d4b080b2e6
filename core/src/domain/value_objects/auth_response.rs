//! Response value objects for the authentication flows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{Role, User};

/// Public profile returned alongside a fresh login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDetail {
    pub name: String,
    pub email: String,
}

impl From<&User> for UserDetail {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Result of a successful login
///
/// Carries both tokens, their expiry instants and the id of the session row
/// that backs the refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Equal to the refresh token's JWT ID
    pub session_id: Uuid,

    /// Short-lived access token
    pub access_token: String,

    /// Long-lived refresh token
    pub refresh_token: String,

    pub access_token_expires_at: DateTime<Utc>,

    pub refresh_token_expires_at: DateTime<Utc>,

    pub user: UserDetail,
}

/// Identity extracted from a verified access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Result of renewing an access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenewResponse {
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
}

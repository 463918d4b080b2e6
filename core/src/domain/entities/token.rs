//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{Role, User};

/// Kind of credential a token represents
///
/// Access and refresh tokens are signed with the same key; this tag is the
/// only thing separating their privilege scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived credential presented on every request
    Access,
    /// Long-lived credential used only to obtain new access tokens
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity a token is issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity id
    pub user_id: String,

    /// Identity email
    pub email: String,

    /// Identity role
    pub role: Role,

    /// Access or refresh
    pub token_type: TokenType,

    /// JWT ID, unique per issuance; doubles as the session id for refresh tokens
    pub jti: String,

    /// Subject (the identity's email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a new token
    ///
    /// # Arguments
    ///
    /// * `principal` - The identity the token speaks for
    /// * `duration` - Validity window starting now
    /// * `token_type` - Access or refresh
    pub fn new(principal: &Principal, duration: Duration, token_type: TokenType) -> Self {
        let now = Utc::now();
        let expiry = now + duration;

        Self {
            user_id: principal.user_id.clone(),
            email: principal.email.clone(),
            role: principal.role,
            token_type,
            jti: Uuid::new_v4().to_string(),
            sub: principal.email.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// The identity these claims were issued for
    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Parses the token id
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the JWT ID is a UUID, `Err` otherwise
    pub fn token_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.jti)
    }
}

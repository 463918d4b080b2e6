//! Configuration for the token service

use chrono::Duration;
use taskhub_shared::config::AuthConfig;

use crate::errors::DomainError;

/// Longest accepted token lifetime, ten years
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Lifetime of access tokens, also the TTL of revocation markers
    pub access_token_duration: Duration,
    /// Lifetime of refresh tokens and their sessions
    pub refresh_token_duration: Duration,
    /// Upper bound on each revocation store call
    pub store_timeout: std::time::Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_duration: Duration::minutes(15),
            refresh_token_duration: Duration::hours(24),
            store_timeout: std::time::Duration::from_millis(3000),
        }
    }
}

impl TryFrom<&AuthConfig> for TokenServiceConfig {
    type Error = DomainError;

    /// Fails when a lifetime is not positive or exceeds
    /// [`MAX_TOKEN_LIFETIME_SECS`]
    fn try_from(config: &AuthConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            jwt_secret: config.jwt.secret.clone(),
            access_token_duration: lifetime(
                "JWT_ACCESS_TOKEN_EXPIRY",
                config.jwt.access_token_expiry,
            )?,
            refresh_token_duration: lifetime(
                "JWT_REFRESH_TOKEN_EXPIRY",
                config.jwt.refresh_token_expiry,
            )?,
            store_timeout: std::time::Duration::from_millis(config.store_timeout_ms),
        })
    }
}

fn lifetime(name: &str, seconds: i64) -> Result<Duration, DomainError> {
    if seconds <= 0 || seconds > MAX_TOKEN_LIFETIME_SECS {
        return Err(DomainError::validation(format!(
            "{} must be between 1 and {} seconds, got {}",
            name, MAX_TOKEN_LIFETIME_SECS, seconds
        )));
    }
    Duration::try_seconds(seconds)
        .ok_or_else(|| DomainError::validation(format!("{} is out of range", name)))
}

//! Redis configuration for the revocation store

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Revocation markers live under this namespace unless overridden
pub const DEFAULT_KEY_PREFIX: &str = "taskhub:revoked";

/// Redis connection and key layout for blacklisted tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Upper bound for a single connection attempt, in milliseconds
    pub connect_timeout_ms: u64,

    /// Attempts per connection or command before giving up
    pub max_retries: u32,

    /// First backoff delay in milliseconds, doubled after every failure
    pub retry_delay_ms: u64,

    /// Namespace prepended to every token key; empty disables it
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connect_timeout_ms: 2000,
            max_retries: 3,
            retry_delay_ms: 100,
            key_prefix: default_key_prefix(),
        }
    }
}

impl CacheConfig {
    /// Create a configuration for `url` with default retry behaviour
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            connect_timeout_ms: env_or("REDIS_CONNECT_TIMEOUT_MS", defaults.connect_timeout_ms)?,
            max_retries: env_or("REDIS_MAX_RETRIES", defaults.max_retries)?.max(1),
            retry_delay_ms: env_or("REDIS_RETRY_DELAY_MS", defaults.retry_delay_ms)?,
            key_prefix: std::env::var("REDIS_KEY_PREFIX").unwrap_or(defaults.key_prefix),
        })
    }

    /// Replace the key namespace
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Redis key under which a token's marker is stored
    pub fn make_key(&self, token: &str) -> String {
        if self.key_prefix.is_empty() {
            token.to_string()
        } else {
            format!("{}:{}", self.key_prefix, token)
        }
    }
}

fn default_key_prefix() -> String {
    String::from(DEFAULT_KEY_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_is_namespaced() {
        let config = CacheConfig::default();
        assert_eq!(config.make_key("eyJhbGciOi"), "taskhub:revoked:eyJhbGciOi");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_custom_and_empty_prefix() {
        let config = CacheConfig::new("redis://cache:6379").with_prefix("taskhub-test");
        assert_eq!(config.make_key("eyJhbGciOi"), "taskhub-test:eyJhbGciOi");

        let bare = CacheConfig::default().with_prefix("");
        assert_eq!(bare.make_key("eyJhbGciOi"), "eyJhbGciOi");
    }
}

//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing, token lifetimes and password hashing
//! - `cache` - Redis configuration for the revocation store
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Revocation store configuration
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every section falls back to its development default when the
    /// corresponding variables are unset. A variable that is set but does not
    /// parse is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::try_from_env()?;
        let logging = LoggingConfig::from_env(environment)?;

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            cache: CacheConfig::from_env()?,
            logging,
        })
    }

    /// Whether the configuration still carries the development signing secret
    pub fn is_insecure(&self) -> bool {
        self.environment.is_production() && self.auth.jwt.is_using_default_secret()
    }
}

/// Environment variable that is set but cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: String,
    pub value: String,
}

/// Reads and parses an environment variable, falling back to `default` only when it is unset
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

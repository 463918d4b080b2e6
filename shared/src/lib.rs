//! Shared configuration and common types for the TaskHub auth service
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, ConfigError, DatabaseConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, PasswordConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};

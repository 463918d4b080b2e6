//! Token service module for JWT management
//!
//! Issues HS256-signed access and refresh tokens, verifies them against the
//! revocation store and records revocations.

mod config;
mod service;


pub use config::{TokenServiceConfig, MAX_TOKEN_LIFETIME_SECS};
pub use service::TokenService;

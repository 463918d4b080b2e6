//! Authentication service module
//!
//! Orchestrates signup, login, access token validation, renewal and logout
//! on top of the token and session services.

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AuthService;

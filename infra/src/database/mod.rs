//! Database module - MySQL implementations using SQLx
//!
//! Connection pool management and the credential store repositories.

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlSessionRepository, MySqlUserRepository};

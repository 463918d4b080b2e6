//! Value objects returned by the authentication flows.

pub mod auth_response;

// Re-export commonly used types
pub use auth_response::{AuthenticatedUser, LoginResponse, RenewResponse, UserDetail};

//! Business services containing the token, session and authentication logic.

pub mod auth;
pub mod session;
pub mod token;

mod store;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use session::SessionService;
pub use token::{TokenService, TokenServiceConfig};

//! Domain entities representing core business objects.

pub mod session;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use session::Session;
pub use token::{Claims, Principal, TokenType};
pub use user::{Role, User};

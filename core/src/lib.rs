//! # TaskHub Auth Core
//!
//! Core business logic for the TaskHub auth service.
//! This crate contains the domain entities, the token and session services,
//! repository and store interfaces, and the error taxonomy that the
//! infrastructure and API layers build on.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Principal, Role, Session, TokenType, User};
pub use domain::value_objects::{AuthenticatedUser, LoginResponse, RenewResponse, UserDetail};
pub use errors::{AuthError, DomainError, DomainResult, ErrorStatus, TokenError};
pub use repositories::{RevocationStore, SessionRepository, UserRepository};
pub use services::{AuthService, AuthServiceConfig, SessionService, TokenService, TokenServiceConfig};

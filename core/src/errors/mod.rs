//! Domain error taxonomy and its mapping to transport status classes.

mod types;


pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Message shown in place of any internal failure detail
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Status class a transport maps an error onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Unauthenticated,
    Internal,
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Status class of this error
    pub fn status(&self) -> ErrorStatus {
        match self {
            DomainError::Validation { .. } => ErrorStatus::InvalidArgument,
            DomainError::NotFound { .. } => ErrorStatus::NotFound,
            DomainError::Internal { .. } => ErrorStatus::Internal,
            DomainError::Token(_) => ErrorStatus::Unauthenticated,
            DomainError::Auth(err) => match err {
                AuthError::UserNotFound => ErrorStatus::NotFound,
                AuthError::UserAlreadyExists => ErrorStatus::AlreadyExists,
                AuthError::InvalidAccessToken | AuthError::InvalidRefreshToken => {
                    ErrorStatus::InvalidArgument
                }
                AuthError::InvalidCredentials
                | AuthError::AccountInactive
                | AuthError::InvalidToken => ErrorStatus::Unauthenticated,
            },
        }
    }

    /// Message safe to return to a caller
    ///
    /// Internal failures collapse to a fixed string so store and driver
    /// details never reach the client.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
            DomainError::Validation { message } => message.clone(),
            DomainError::NotFound { resource } => format!("{} not found", resource),
            DomainError::Auth(err) => err.to_string(),
            DomainError::Token(err) => err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

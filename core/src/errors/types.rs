//! Error types for authentication and token management
//!
//! Display strings here are the messages callers see; transport layers map
//! variants to status codes through [`super::ErrorStatus`].

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong password for a known account
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No account for the given email
    #[error("Invalid email or password")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    /// Account exists but may not log in
    #[error("Invalid email or password")]
    AccountInactive,

    /// Access token rejected during validation
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Access token rejected during logout
    #[error("Invalid access token")]
    InvalidAccessToken,

    /// Refresh token rejected during logout
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
}

/// Token and session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A revocation marker exists for the token
    #[error("token is blacklisted")]
    Blacklisted,

    /// Signature mismatch or malformed token
    #[error("invalid token")]
    BadSignature,

    #[error("invalid token")]
    Expired,

    /// Access token presented where a refresh token was expected or vice versa
    #[error("invalid token type")]
    WrongKind,

    /// The revocation store could not be consulted
    #[error("token revocation status unavailable")]
    RevocationUnavailable,

    #[error("Session blocked")]
    SessionBlocked,

    /// Stored session does not belong to the presented refresh token
    #[error("Invalid session")]
    SessionMismatch,

    #[error("Expired session")]
    SessionExpired,
}

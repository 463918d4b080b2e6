//! MySQL implementations of the credential store repositories
//!
//! Expected tables:
//!
//! ```sql
//! CREATE TABLE users (
//!     id            CHAR(36)     NOT NULL PRIMARY KEY,
//!     name          VARCHAR(255) NOT NULL DEFAULT '',
//!     email         VARCHAR(100) NOT NULL UNIQUE,
//!     password_hash VARCHAR(100) NOT NULL,
//!     role          VARCHAR(20)  NOT NULL DEFAULT 'user',
//!     is_active     BOOLEAN      NOT NULL DEFAULT TRUE,
//!     created_at    TIMESTAMP    NOT NULL DEFAULT CURRENT_TIMESTAMP,
//!     updated_at    TIMESTAMP    NOT NULL DEFAULT CURRENT_TIMESTAMP
//! );
//!
//! CREATE TABLE sessions (
//!     id            CHAR(36)     NOT NULL PRIMARY KEY,
//!     email         VARCHAR(100) NOT NULL,
//!     refresh_token TEXT         NOT NULL,
//!     expires_at    TIMESTAMP    NOT NULL,
//!     is_blocked    BOOLEAN      NOT NULL DEFAULT FALSE,
//!     blocked_at    TIMESTAMP    NULL,
//!     created_at    TIMESTAMP    NOT NULL DEFAULT CURRENT_TIMESTAMP,
//!     updated_at    TIMESTAMP    NOT NULL DEFAULT CURRENT_TIMESTAMP,
//!     INDEX idx_sessions_email (email)
//! );
//! ```

pub mod session_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use session_repository_impl::MySqlSessionRepository;
pub use user_repository_impl::MySqlUserRepository;

use taskhub_core::errors::DomainError;

/// Wrap a driver error as an internal domain error
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    DomainError::internal(format!("{}: {}", context, error))
}

/// MySQL error code for a duplicate key
pub(crate) const DUPLICATE_ENTRY: &str = "23000";

/// Whether `error` is a unique constraint violation
pub(crate) fn is_duplicate(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(DUPLICATE_ENTRY),
        _ => false,
    }
}

//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong password or unknown username).
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Username is already registered.
    #[error("username already exists")]
    UsernameTaken,

    /// Email is already registered.
    #[error("email already exists")]
    EmailTaken,

    /// User behind a session no longer exists.
    #[error("user not found")]
    UserNotFound,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

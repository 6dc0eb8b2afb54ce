//! Auth service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::{CustomerTokenError, PasswordError};

/// Auth/Token Service failures.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// No customer owns the login, or no stored token matches.
    #[error("no such user")]
    NoSuchUser,

    /// The login exists but the password does not match.
    #[error("invalid credential")]
    InvalidCredential,

    /// The token exists but is older than its lifetime.
    #[error("token expired")]
    TokenExpired,

    /// A manager with the same login is already registered.
    #[error("manager login already exists")]
    AlreadyExists,

    /// Storage failure; the sqlx error is kept as the source.
    #[error("storage error: {0}")]
    Sql(#[source] Error),

    /// Hashing or verifying a password failed.
    #[error("password processing error: {0}")]
    Password(#[from] PasswordError),

    /// The random source could not produce a token.
    #[error("token generation error: {0}")]
    Token(#[from] CustomerTokenError),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}

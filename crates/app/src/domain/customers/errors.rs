//! Customers service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::PasswordError;

/// Customer Store failures.
#[derive(Debug, Error)]
pub enum CustomersServiceError {
    /// No customer has the requested id.
    #[error("customer not found")]
    NotFound,

    /// Another customer already uses the phone number.
    #[error("customer with this phone already exists")]
    AlreadyExists,

    /// Hashing the new customer's password failed.
    #[error("password processing error: {0}")]
    Password(#[from] PasswordError),

    /// Storage failure; the sqlx error is kept as the source.
    #[error("storage error: {0}")]
    Sql(#[source] Error),
}

impl From<Error> for CustomersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}

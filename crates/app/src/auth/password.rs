//! Salted password hashing shared by customer and manager credentials.

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use thiserror::Error;
use tokio::task::{self, JoinError};
use zeroize::Zeroizing;

/// Password hashing failures.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The hasher rejected the input.
    #[error("password hashing failed: {0}")]
    Hash(#[source] HashError),

    /// The stored hash is not a PHC string.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(#[source] HashError),

    /// The blocking task panicked or was cancelled.
    #[error("password hashing task failed: {0}")]
    Task(#[from] JoinError),
}

/// Hash a plaintext password with a freshly generated salt.
///
/// Uses Argon2id with the library defaults, which are tuned for interactive logins.
///
/// # Errors
///
/// Returns an error if the hasher rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Check a plaintext password against a stored PHC hash string.
///
/// Returns `Ok(false)` on mismatch.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed or verification itself fails.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(error) => Err(PasswordError::Hash(error)),
    }
}

/// [`hash_password`] on the blocking thread pool.
///
/// # Errors
///
/// Returns an error if hashing fails or the blocking task is cancelled.
pub async fn spawn_hash_password(password: Zeroizing<String>) -> Result<String, PasswordError> {
    task::spawn_blocking(move || hash_password(&password)).await?
}

/// [`verify_password`] on the blocking thread pool.
///
/// # Errors
///
/// Returns an error if verification fails or the blocking task is cancelled.
pub async fn spawn_verify_password(
    password: Zeroizing<String>,
    hash: String,
) -> Result<bool, PasswordError> {
    task::spawn_blocking(move || verify_password(&password, &hash)).await?
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hashed_password_verifies() -> TestResult {
        let hash = hash_password("secret")?;

        assert!(verify_password("secret", &hash)?, "password should verify");
        assert!(!hash.contains("secret"), "hash must not embed the plaintext");

        Ok(())
    }

    #[test]
    fn wrong_password_does_not_verify() -> TestResult {
        let hash = hash_password("secret")?;

        assert!(!verify_password("Secret", &hash)?, "mismatch should be false");

        Ok(())
    }

    #[test]
    fn hashes_are_salted() -> TestResult {
        let first = hash_password("secret")?;
        let second = hash_password("secret")?;

        assert_ne!(first, second, "each hash should use a fresh salt");

        Ok(())
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let result = verify_password("secret", "not-a-phc-string");

        assert!(
            matches!(result, Err(PasswordError::MalformedHash(_))),
            "expected MalformedHash, got {result:?}"
        );
    }

    #[tokio::test]
    async fn blocking_helpers_round_trip() -> TestResult {
        let hash = spawn_hash_password(Zeroizing::new("secret".to_string())).await?;
        let valid = spawn_verify_password(Zeroizing::new("secret".to_string()), hash).await?;

        assert!(valid, "password should verify off the async runtime");

        Ok(())
    }
}

//! Customer bearer token generation, shape checks, and expiry.

use std::fmt;

use jiff::Timestamp;
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use zeroize::Zeroize;

/// Number of random bytes behind each customer token.
pub const CUSTOMER_TOKEN_BYTES: usize = 256;

/// Length of the lowercase hex encoding handed to customers.
pub const CUSTOMER_TOKEN_HEX_CHARS: usize = CUSTOMER_TOKEN_BYTES * 2;

/// Tokens older than this are rejected even while still stored.
pub const CUSTOMER_TOKEN_TTL_HOURS: f64 = 1.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Raw token bytes, wiped on drop.
pub struct CustomerTokenSecret {
    bytes: [u8; CUSTOMER_TOKEN_BYTES],
}

impl CustomerTokenSecret {
    /// Wrap existing bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; CUSTOMER_TOKEN_BYTES]) -> Self {
        Self { bytes }
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; CUSTOMER_TOKEN_BYTES] {
        &self.bytes
    }

    /// Lowercase hex form stored in `customers_tokens` and returned to the customer.
    #[must_use]
    pub fn encode(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Debug for CustomerTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomerTokenSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for CustomerTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Token generation failures.
#[derive(Debug, Error)]
pub enum CustomerTokenError {
    /// The operating system CSPRNG failed.
    #[error("secure random source failed: {0}")]
    RandomSource(#[source] rand::Error),
}

/// Draw a new token secret from the operating system CSPRNG.
///
/// # Errors
///
/// Returns an error if the random source cannot fill the whole buffer.
pub fn generate_customer_token_secret() -> Result<CustomerTokenSecret, CustomerTokenError> {
    let mut secret = CustomerTokenSecret::from_bytes([0_u8; CUSTOMER_TOKEN_BYTES]);

    OsRng
        .try_fill_bytes(&mut secret.bytes)
        .map_err(CustomerTokenError::RandomSource)?;

    Ok(secret)
}

/// Whether `token` has the exact shape produced by [`CustomerTokenSecret::encode`].
#[must_use]
pub fn is_well_formed_customer_token(token: &str) -> bool {
    token.len() == CUSTOMER_TOKEN_HEX_CHARS
        && token
            .bytes()
            .all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f'))
}

/// Fractional hours between issuance and `now`.
#[must_use]
pub fn elapsed_hours(created: Timestamp, now: Timestamp) -> f64 {
    now.duration_since(created).as_secs_f64() / SECONDS_PER_HOUR
}

/// Whether a token `elapsed_hours` old is past its lifetime.
#[must_use]
pub fn is_customer_token_expired(elapsed_hours: f64) -> bool {
    elapsed_hours > CUSTOMER_TOKEN_TTL_HOURS
}

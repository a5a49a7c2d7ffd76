//! Salted one-way password hashing.
//!
//! Uses PBKDF2 through the `password_hash` API with default parameters.
//! Stored hashes are self-describing PHC strings, so verification needs no
//! out-of-band configuration.

use pbkdf2::Pbkdf2;
use pbkdf2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;

/// Failure while producing a password hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("password hashing failed: {message}")]
pub struct PasswordHashError {
    message: String,
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Pbkdf2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| PasswordHashError {
            message: err.to_string(),
        })
}

/// Verify a plaintext password against a stored hash.
///
/// Returns false on mismatch or when the stored hash cannot be parsed;
/// callers never see an error for bad stored data.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| Pbkdf2.verify_password(plaintext.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}

//! Secret hashing for the user directory.
//!
//! Secrets are stored as Argon2id PHC strings; salt and parameters travel
//! inside the string, so verification needs nothing else.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::RngCore;

use crate::error::StoreError;

const SALT_BYTES: usize = 16;

/// Hashes a secret with Argon2id and a random salt.
///
/// # Errors
///
/// Returns [`StoreError::Hashing`] if the salt cannot be encoded or the
/// hasher rejects its input.
pub fn hash_secret(secret: &str) -> Result<String, StoreError> {
    let mut salt_bytes = [0u8; SALT_BYTES];
    rand::rng().fill_bytes(&mut salt_bytes);
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| StoreError::Hashing(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| StoreError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a candidate against a stored PHC string.
///
/// An unparsable stored hash never matches.
pub fn secret_matches(stored_hash: &str, candidate: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::error!("Stored secret hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok()
}

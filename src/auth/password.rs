//! Password hashing and verification.
//!
//! Uses Argon2id with a fixed cost. Digests are PHC strings carrying their
//! own salt and parameters, so verification does not depend on the current
//! cost settings.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use thiserror::Error;

use crate::ClubAuthError;

/// Memory cost in KiB.
pub const MEMORY_COST_KIB: u32 = 19_456;

/// Number of passes.
pub const TIME_COST: u32 = 2;

/// Degree of parallelism.
pub const PARALLELISM: u32 = 1;

/// Password hashing errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),

    /// The stored digest could not be parsed.
    #[error("invalid password hash format")]
    InvalidHash,
}

fn create_argon2() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password with a fresh random salt.
///
/// # Examples
///
/// ```
/// use clubauth::hash_password;
///
/// let hash = hash_password("secret1").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = create_argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check a password against a stored digest.
///
/// Returns `Ok(false)` on mismatch. The comparison itself is constant-time
/// inside the argon2 crate. A digest that cannot be parsed is an error, not a
/// mismatch.
///
/// # Examples
///
/// ```
/// use clubauth::{hash_password, verify_password};
///
/// let hash = hash_password("secret1").unwrap();
/// assert!(verify_password("secret1", &hash).unwrap());
/// assert!(!verify_password("secret2", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::HashError(e.to_string())),
    }
}

/// Hash on the blocking thread pool so request tasks keep running.
pub async fn hash_password_blocking(password: String) -> crate::Result<String> {
    let result = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {}", e);
            ClubAuthError::Internal("Server error".to_string())
        })?;

    result.map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        ClubAuthError::Internal("Server error".to_string())
    })
}

/// Verify on the blocking thread pool so request tasks keep running.
pub async fn verify_password_blocking(password: String, hash: String) -> crate::Result<bool> {
    let result = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {}", e);
            ClubAuthError::Internal("Server error".to_string())
        })?;

    result.map_err(|e| {
        tracing::error!("Password verification failed: {}", e);
        ClubAuthError::Internal("Server error".to_string())
    })
}

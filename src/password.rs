/// Password Hashing and Verification
///
/// Bcrypt primitives for the password stage of login. Credential storage
/// itself lives outside this crate; hosts hash at provisioning time and the
/// gate compares at login time.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AuthError;

/// Hash a password using bcrypt
///
/// # Errors
/// Returns the generic password-stage error if bcrypt hashing fails;
/// the underlying cause is logged, never returned
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        AuthError::AuthFailure
    })
}

/// Verify a password against its bcrypt hash
///
/// # Arguments
/// * `password` - Plain text password to verify
/// * `hash` - Bcrypt hash to verify against
///
/// # Errors
/// Returns the generic password-stage error if the stored hash cannot be
/// processed (a mismatch is `Ok(false)`, not an error)
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    verify(password, hash).map_err(|e| {
        tracing::error!("Password verification failed: {}", e);
        AuthError::AuthFailure
    })
}

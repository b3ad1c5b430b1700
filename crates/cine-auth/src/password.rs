//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings with an embedded per-hash random salt, so two
//! identical passwords never share a digest.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Hash a plaintext password. Default Argon2id cost parameters; the cost is
/// fixed process-wide, not configurable.
#[track_caller]
pub fn hash(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a plaintext password against a stored PHC hash.
///
/// The comparison is the argon2 verify primitive (digest recomputation and
/// constant-time compare), never raw string equality. An unparsable stored
/// hash verifies as false rather than erroring: a login attempt against a
/// corrupt record must look like a wrong password.
pub fn verify(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

//! Password hashing using Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::error;

use crate::domain::user::{CredentialError, PasswordHasher};
use crate::domain::DomainError;

/// Argon2-based password hasher
///
/// Uses the algorithm's default parameters and a fresh OS-random salt per
/// hash; the salt travels inside the PHC-format output string.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        if password.is_empty() {
            return Err(CredentialError::EmptyCredential.into());
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!(error = %e, "argon2 hash_password error");
                DomainError::internal(format!("Failed to hash password: {}", e))
            })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<(), CredentialError> {
        // A malformed stored hash and a wrong password are indistinguishable
        // to the caller
        let parsed_hash = PasswordHash::new(hash).map_err(|_| CredentialError::Mismatch)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| CredentialError::Mismatch)
    }
}

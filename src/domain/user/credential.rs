//! Credential hashing seam

use std::fmt::Debug;

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur while hashing or verifying credentials
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("password cannot be empty")]
    EmptyCredential,

    #[error("credential mismatch")]
    Mismatch,
}

/// Trait for password hashing operations
///
/// Implementations embed the salt in the hash output, so verification
/// needs no separate salt storage.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Derive a one-way hash of a plaintext password
    ///
    /// Fails with [`CredentialError::EmptyCredential`] on zero-length input.
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a candidate password against a stored hash
    ///
    /// A malformed hash and a wrong password both collapse to
    /// [`CredentialError::Mismatch`].
    fn verify(&self, password: &str, hash: &str) -> Result<(), CredentialError>;
}

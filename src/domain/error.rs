use thiserror::Error;

use crate::domain::user::{CredentialError, UserValidationError};

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] UserValidationError),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User 'test-id' not found");
        assert_eq!(error.to_string(), "Not found: User 'test-id' not found");
    }

    #[test]
    fn test_validation_error_wraps_kind() {
        let error = DomainError::from(UserValidationError::MissingField("name"));
        assert!(matches!(error, DomainError::Validation(_)));
        assert_eq!(error.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_credential_error_wraps_kind() {
        let error = DomainError::from(CredentialError::EmptyCredential);
        assert!(matches!(error, DomainError::Credential(_)));
    }

    #[test]
    fn test_invalid_id_error() {
        let error = DomainError::invalid_id("not a UUID");
        assert_eq!(error.to_string(), "Invalid ID format: not a UUID");
    }
}

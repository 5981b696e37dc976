//! User domain
//!
//! This module provides the user entity, its validation and normalization
//! rules, and the repository and credential-hashing traits.

mod credential;
mod entity;
mod repository;
mod validation;

pub use credential::{CredentialError, PasswordHasher};
pub use entity::{Role, User, UserStatus};
pub use repository::UserRepository;
pub use validation::{
    validate, validate_email, validate_password, UserValidationError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};

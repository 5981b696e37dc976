//! User validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::User;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email format")]
    InvalidFormat,

    #[error("password must be between {min} and {max} characters")]
    InvalidLength { min: usize, max: usize },
}

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Canonical address pattern: ASCII local part and domain, 2-4 character TLD
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$").expect("valid email regex")
});

/// Validate an email address against the canonical pattern
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::MissingField("email"));
    }

    if !EMAIL_RE.is_match(email) {
        return Err(UserValidationError::InvalidFormat);
    }

    Ok(())
}

/// Validate a password's length bounds
///
/// The upper bound keeps the input inside the hashing algorithm's own
/// limits; the lower bound is a minimum-strength floor.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH || password.len() > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::InvalidLength {
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validate a user record
///
/// Pure check with no defaulting; callers run [`User::normalize`] first.
/// An empty password passes here (the update path treats it as "leave
/// unchanged"); a non-empty one must satisfy the length bounds.
pub fn validate(user: &User) -> Result<(), UserValidationError> {
    if user.name().is_empty() {
        return Err(UserValidationError::MissingField("name"));
    }

    validate_email(user.email())?;

    if !user.password().is_empty() {
        validate_password(user.password())?;
    }

    Ok(())
}

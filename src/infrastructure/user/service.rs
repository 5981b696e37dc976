//! User service - use-case orchestration around the user lifecycle

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::user::{validate, PasswordHasher, User, UserRepository};
use crate::domain::DomainError;

/// User service composing validation, hashing, and the repository
///
/// Owns no state of its own; each use case is a single sequential pass
/// with no retries. Any failure aborts before the persistence call.
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Get a user by id
    pub async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// Create a new user
    ///
    /// Pre-create hook: stamp both timestamps, normalize, validate, then
    /// hash the password in place. A record is never hashed-and-stored
    /// with invalid fields, and creation requires a password.
    pub async fn create(&self, mut user: User) -> Result<User, DomainError> {
        user.stamp_created();
        user.normalize();
        validate(&user)?;

        let hash = self.hasher.hash(user.password())?;
        user.set_password(hash);

        self.repository.insert(user).await
    }

    /// Update an existing user via full replace
    ///
    /// Pre-update hook: refresh `updated_at`, normalize, validate. The
    /// creation timestamp is carried over from the stored record; an empty
    /// password means "leave unchanged" while a non-empty one is re-hashed.
    pub async fn update(&self, mut user: User) -> Result<User, DomainError> {
        let existing = self.get(user.id()).await?;

        user.restore_created_at(existing.created_at());
        user.touch();
        user.normalize();
        validate(&user)?;

        if user.password().is_empty() {
            user.set_password(existing.password());
        } else {
            let hash = self.hasher.hash(user.password())?;
            user.set_password(hash);
        }

        self.repository.replace(user).await
    }

    /// Delete a user by id
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repository.delete_by_id(id).await
    }
}

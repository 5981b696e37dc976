//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// A thin pass-through to the backing store: no caching, no transactions,
/// no batching. Per-record atomicity of insert/replace/delete is delegated
/// to the store.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// List all users in store-native order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Insert a new user, returning the record with its store-assigned id
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite the full record keyed by its id
    async fn replace(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user by id
    async fn delete_by_id(&self, id: Uuid) -> Result<(), DomainError>;
}

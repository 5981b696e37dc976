//! Application state for shared services

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::user::{PasswordHasher, UserRepository};
use crate::domain::{DomainError, User};
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: Uuid) -> Result<User, DomainError>;
    async fn create(&self, user: User) -> Result<User, DomainError>;
    async fn update(&self, user: User) -> Result<User, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository, H: PasswordHasher> UserServiceTrait for UserService<R, H> {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        UserService::create(self, user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        UserService::update(self, user).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

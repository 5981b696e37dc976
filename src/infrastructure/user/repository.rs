//! In-memory user repository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Used by tests and storage-less runs. Assigns ids on insert the way the
/// real store would.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(users: &HashMap<Uuid, User>, email: &str, exclude: Uuid) -> bool {
    users
        .values()
        .any(|u| u.email() == email && u.id() != exclude)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, DomainError> {
        // Check-and-write under one write lock so concurrent inserts
        // cannot both pass the uniqueness check
        let mut users = self.users.write().await;

        if email_taken(&users, user.email(), user.id()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                user.email()
            )));
        }

        user.set_id(Uuid::new_v4());
        users.insert(user.id(), user.clone());

        Ok(user)
    }

    async fn replace(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Existence first: a missing id is NotFound even when the email
        // would also conflict
        if !users.contains_key(&user.id()) {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        if email_taken(&users, user.email(), user.id()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                user.email()
            )));
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_none() {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::user::{Role, UserStatus};

    fn create_test_user(name: &str, email: &str) -> User {
        let mut user = User::new(name, email, "hashed_password", None, None);
        user.normalize();
        user
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("Ann", "ann@example.com");
        assert!(user.id().is_nil());

        let stored = repo.insert(user).await.unwrap();
        assert!(!stored.id().is_nil());
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let stored = repo
            .insert(create_test_user("Ann", "ann@example.com"))
            .await
            .unwrap();

        let found = repo.find_by_id(stored.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Ann");
        assert_eq!(found.email(), "ann@example.com");
        assert_eq!(found.role(), Role::User);
        assert_eq!(found.status(), UserStatus::Active);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = InMemoryUserRepository::new();
        let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(create_test_user("Ann", "ann@example.com"))
            .await
            .unwrap();

        let result = repo
            .insert(create_test_user("Another Ann", "ann@example.com"))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_replace() {
        let repo = InMemoryUserRepository::new();
        let mut stored = repo
            .insert(create_test_user("Ann", "ann@example.com"))
            .await
            .unwrap();

        stored.set_password("new_hash");
        let replaced = repo.replace(stored.clone()).await.unwrap();
        assert_eq!(replaced.password(), "new_hash");

        let found = repo.find_by_id(stored.id()).await.unwrap().unwrap();
        assert_eq!(found.password(), "new_hash");
    }

    #[tokio::test]
    async fn test_replace_missing() {
        let repo = InMemoryUserRepository::new();
        let mut user = create_test_user("Ann", "ann@example.com");
        user.set_id(Uuid::new_v4());

        let result = repo.replace(user).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_replace_missing_id_with_conflicting_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(create_test_user("Ann", "ann@example.com"))
            .await
            .unwrap();

        // The id does not exist, so NotFound wins over the email conflict
        let mut user = create_test_user("Impostor", "ann@example.com");
        user.set_id(Uuid::new_v4());

        let result = repo.replace(user).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_replace_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(create_test_user("Ann", "ann@example.com"))
            .await
            .unwrap();
        let bob = repo
            .insert(create_test_user("Bob", "bob@example.com"))
            .await
            .unwrap();

        let mut replacement = create_test_user("Bob", "ann@example.com");
        replacement.set_id(bob.id());

        let result = repo.replace(replacement).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_one_conflict() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let a = {
            let repo = Arc::clone(&repo);
            tokio::spawn(
                async move { repo.insert(create_test_user("Ann", "ann@example.com")).await },
            )
        };
        let b = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.insert(create_test_user("Other Ann", "ann@example.com"))
                    .await
            })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();

        assert_eq!(successes, 1);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let stored = repo
            .insert(create_test_user("Ann", "ann@example.com"))
            .await
            .unwrap();

        repo.delete_by_id(stored.id()).await.unwrap();
        assert!(repo.find_by_id(stored.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = InMemoryUserRepository::new();
        let result = repo.delete_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_find_all() {
        let repo = InMemoryUserRepository::new();
        repo.insert(create_test_user("Ann", "ann@example.com"))
            .await
            .unwrap();
        repo.insert(create_test_user("Bob", "bob@example.com"))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}

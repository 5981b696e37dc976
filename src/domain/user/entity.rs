//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator with full access
    Admin,
    /// Regular user
    #[default]
    User,
}

/// Status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// User is active
    #[default]
    Active,
    /// User is deactivated but may be reactivated
    Inactive,
    /// User is banned
    Banned,
}

/// User entity
///
/// The `password` field carries the inbound plaintext only until the
/// pre-create hook replaces it with the Argon2 hash; persisted records
/// always hold the hash. It is never serialized outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store on insert
    #[serde(default = "Uuid::nil")]
    id: Uuid,
    /// Display name
    name: String,
    /// Email address
    email: String,
    /// Plaintext before hashing, hash afterwards - never exposed
    #[serde(skip_serializing, default)]
    password: String,
    /// Role, `None` until normalized
    #[serde(default)]
    role: Option<Role>,
    /// Status, `None` until normalized
    #[serde(default)]
    status: Option<UserStatus>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from inbound fields, without an id or timestamps
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Option<Role>,
        status: Option<UserStatus>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::nil(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a user from stored fields
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
        status: UserStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: Some(role),
            status: Some(status),
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Role, falling back to the default for not-yet-normalized users
    pub fn role(&self) -> Role {
        self.role.unwrap_or_default()
    }

    /// Status, falling back to the default for not-yet-normalized users
    pub fn status(&self) -> UserStatus {
        self.status.unwrap_or_default()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the store has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        !self.id.is_nil()
    }

    // Mutators

    /// Fill in defaults for unset enumerated fields
    ///
    /// Idempotent: normalizing an already-normalized user changes nothing.
    pub fn normalize(&mut self) {
        self.role.get_or_insert(Role::default());
        self.status.get_or_insert(UserStatus::default());
    }

    /// Replace the password contents (plaintext with hash, or hash carry-over)
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Assign the store-provided id after insert
    pub fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    /// Stamp both timestamps at creation time
    pub fn stamp_created(&mut self) {
        let now = Utc::now();
        self.created_at = now;
        self.updated_at = now;
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Restore the original creation timestamp on the update path
    ///
    /// `created_at` is system-owned; whatever the client sent is discarded.
    pub fn restore_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new("Ann", "ann@example.com", "longenough1", None, None)
    }

    #[test]
    fn test_new_user_has_nil_id() {
        let user = create_test_user();
        assert!(user.id().is_nil());
        assert!(!user.is_persisted());
    }

    #[test]
    fn test_new_user_timestamps_equal() {
        let user = create_test_user();
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_normalize_assigns_defaults() {
        let mut user = create_test_user();
        user.normalize();
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.status(), UserStatus::Active);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut user = User::new(
            "Ann",
            "ann@example.com",
            "longenough1",
            Some(Role::Admin),
            Some(UserStatus::Banned),
        );

        user.normalize();
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.status(), UserStatus::Banned);

        user.normalize();
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.status(), UserStatus::Banned);
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut user = create_test_user();
        let original_updated = user.updated_at();

        // Small delay to ensure timestamp differs
        std::thread::sleep(std::time::Duration::from_millis(10));

        user.touch();
        assert!(user.updated_at() > original_updated);
        assert_eq!(user.created_at(), original_updated);
    }

    #[test]
    fn test_serialization_excludes_password() {
        let user = create_test_user();

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("longenough1"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_deserialization_defaults() {
        let json = r#"{
            "name": "Ann",
            "email": "ann@example.com",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.id().is_nil());
        assert!(user.password().is_empty());
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.status(), UserStatus::Active);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::Inactive).unwrap(),
            "\"inactive\""
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::Banned).unwrap(),
            "\"banned\""
        );
    }
}

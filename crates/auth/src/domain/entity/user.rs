//! User Entity
//!
//! The signed-in user's profile. Created on successful login or
//! registration, immutable afterwards except by a fresh login, destroyed
//! on logout.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier
    pub id: UserId,
    /// Validated email address
    pub email: Email,
    /// Display name
    pub name: String,
    /// Role, open enumeration defaulting to "user"
    #[serde(default)]
    pub role: UserRole,
    /// Optional avatar reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a new user with the default role and no avatar
    pub fn new(id: UserId, email: Email, name: impl Into<String>) -> Self {
        Self {
            id,
            email,
            name: name.into(),
            role: UserRole::default(),
            avatar: None,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            UserId::generate(),
            Email::new("user@example.com").unwrap(),
            "Alice",
        );
        assert_eq!(user.role, UserRole::User);
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_user_json_roundtrip() {
        let user = User::new(
            UserId::new("1"),
            Email::new("admin@example.com").unwrap(),
            "Admin User",
        )
        .with_role(UserRole::Admin);

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_json_without_role_defaults() {
        let json = r#"{"id":"1","email":"a@b.co","name":"A"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::User);
    }
}

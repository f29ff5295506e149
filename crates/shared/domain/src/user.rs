//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{ROLE_ADMIN, ROLE_EDITOR};

/// Account role; new accounts default to editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Editor,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role may write editorial content
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Editor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Editor => ROLE_EDITOR,
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::Editor,
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from(s.as_str())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Plain text password, hashed by the store
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_defaults_to_editor() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("editor"), UserRole::Editor);
        assert_eq!(UserRole::from("owner"), UserRole::Editor);
    }

    #[test]
    fn test_role_round_trips_through_string() {
        let role: String = UserRole::Admin.into();
        assert_eq!(role, "admin");
        assert_eq!(UserRole::from(role), UserRole::Admin);
    }

    #[test]
    fn test_new_user_rejects_invalid_email() {
        let user = NewUser {
            email: "not-an-email".to_string(),
            password: "payload".to_string(),
            role: UserRole::Editor,
        };
        assert!(user.validate().is_err());
    }
}

//! User model representing a registered site account.

use crate::domain::{PasswordHash, RecordId};
use serde::{Deserialize, Serialize};

/// A registered account as held by the identity store.
///
/// Only the salted digest of the password is kept. This type is never
/// serialized; use [`UserProfile`] for anything that leaves the service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Opaque unique identifier
    pub id: RecordId,

    /// Display name
    pub name: String,

    /// Email address (unique, case-sensitive)
    pub email: String,

    /// Salted password digest
    pub password_hash: PasswordHash,

    /// When the account was created (RFC 3339 timestamp)
    pub created_at: String,
}

impl User {
    /// Create a new user with a fresh identifier, hashing the password.
    pub fn new(name: String, email: String, password: &str) -> Self {
        Self {
            id: RecordId::generate(),
            name,
            email,
            password_hash: PasswordHash::create(password),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The public view of this user.
    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

/// Every user field except the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at.clone(),
        }
    }
}

/// Registration request body. Fields are optional so that absence is reported
/// as a validation failure rather than a decode error.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RegistrationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegistrationRequest {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}

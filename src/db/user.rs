//! User model for unsocial-core.

use chrono::{DateTime, Utc};

/// User entity representing a registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique object id (24 hex characters).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Login username (unique).
    pub username: String,
    /// Password hash (Argon2id, PHC format).
    pub password: String,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Login username.
    pub username: String,
    /// Already-hashed password.
    pub password: String,
}

impl NewUser {
    /// Create new-user data. The password must already be hashed.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

//! User repository for unsocial-core.
//!
//! CRUD operations for user accounts.

use chrono::{DateTime, Utc};

use super::{generate_id, DbPool, NewUser, User};
use crate::Result;

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a freshly generated id.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let user = User {
            id: generate_id(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            username: new_user.username.clone(),
            password: new_user.password.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO users (id, name, email, username, password, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.created_at.to_rfc3339())
        .execute(self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, email, username, password, created_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| row.into_user()))
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, email, username, password, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| row.into_user()))
    }

    /// Check if a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(self.pool)
                .await?;
        Ok(exists.0)
    }

    /// Check if an email address is already taken.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(self.pool)
            .await?;
        Ok(exists.0)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Delete all users. Intended for test setup.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users").execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// Internal struct for mapping database rows to User.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    username: String,
    password: String,
    created_at: String,
}

impl UserRow {
    fn into_user(self) -> User {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_default();
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            username: self.username,
            password: self.password,
            created_at,
        }
    }
}

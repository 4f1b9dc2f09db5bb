//! User operations: registration, authentication, profile lookup.

use tracing::{debug, info};

use crate::auth;
use crate::db::{Database, NewUser, User, UserRepository};
use crate::{validate, Result, UnsocialError};

/// Register a new user.
///
/// Validates all fields, rejects duplicate email or username, hashes the
/// password, and persists the account.
pub async fn register_user(
    db: &Database,
    name: &str,
    email: &str,
    username: &str,
    password: &str,
) -> Result<User> {
    validate::name(name)?;
    validate::email(email)?;
    validate::username(username)?;
    validate::password(password)?;

    let repo = UserRepository::new(db.pool());

    if repo.email_exists(email).await? {
        return Err(UnsocialError::Duplicate("email".to_string()));
    }
    if repo.username_exists(username).await? {
        return Err(UnsocialError::Duplicate("username".to_string()));
    }

    let hash = auth::hash_password(password)?;
    let user = repo.create(&NewUser::new(name, email, username, hash)).await?;

    info!(user_id = %user.id, username = %user.username, "user registered");

    Ok(user)
}

/// Authenticate a user by username and password.
///
/// Returns the user's id on success. Fails `NotFound` for an unknown
/// username and `Credentials` for a wrong password.
pub async fn authenticate_user(db: &Database, username: &str, password: &str) -> Result<String> {
    validate::username(username)?;
    validate::password(password)?;

    let repo = UserRepository::new(db.pool());
    let user = repo
        .find_by_username(username)
        .await?
        .ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;

    auth::verify_password(password, &user.password)?;

    debug!(user_id = %user.id, "user authenticated");

    Ok(user.id)
}

/// Get the display name of a target user, on behalf of a requester.
///
/// A missing requester fails with "user not found"; a missing target fails
/// with the distinct "target user not found".
pub async fn get_user_name(db: &Database, requester_id: &str, target_id: &str) -> Result<String> {
    validate::id(requester_id, "requester_id")?;
    validate::id(target_id, "target_id")?;

    let repo = UserRepository::new(db.pool());

    repo.find_by_id(requester_id)
        .await?
        .ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;

    let target = repo
        .find_by_id(target_id)
        .await?
        .ok_or_else(|| UnsocialError::NotFound("target user".to_string()))?;

    Ok(target.name)
}

//! Shared fixtures for logic integration tests.

use unsocial_core::{Database, NewPost, NewUser, Post, PostRepository, User, UserRepository};

/// A well-formed id that matches no stored document.
pub const MISSING_ID: &str = "012345678901234567890123";

/// Open a fresh in-memory database.
pub async fn setup_db() -> Database {
    Database::open_in_memory().await.unwrap()
}

/// Insert a user with the given username; other fields are derived.
pub async fn create_user(db: &Database, username: &str) -> User {
    let repo = UserRepository::new(db.pool());
    let hash = unsocial_core::auth::hash_password("123123123").unwrap();
    repo.create(&NewUser::new(
        format!("User {username}"),
        format!("{username}@example.com"),
        username,
        hash,
    ))
    .await
    .unwrap()
}

/// Insert a post authored by the given user.
pub async fn create_post_for(db: &Database, author: &User) -> Post {
    let repo = PostRepository::new(db.pool());
    repo.create(&NewPost::new(
        &author.id,
        "https://www.image.com",
        "hello world",
    ))
    .await
    .unwrap()
}

//! Post operations: creation, feed listing, deletion, likes.

use tracing::{debug, info};

use crate::db::{Database, UserRepository};
use crate::post::{NewPost, Post, PostRepository};
use crate::{validate, Result, UnsocialError};

/// Create a new post for an existing user.
///
/// Persists exactly one post referencing the user, timestamped at creation,
/// with no comments or likes.
pub async fn create_post(db: &Database, user_id: &str, image: &str, text: &str) -> Result<Post> {
    validate::id(user_id, "user_id")?;
    validate::image(image)?;
    validate::text(text)?;

    let users = UserRepository::new(db.pool());
    users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;

    let posts = PostRepository::new(db.pool());
    let post = posts.create(&NewPost::new(user_id, image, text)).await?;

    info!(post_id = %post.id, author = %post.author, "post created");

    Ok(post)
}

/// List all posts, newest first, on behalf of an existing user.
pub async fn get_posts(db: &Database, user_id: &str) -> Result<Vec<Post>> {
    validate::id(user_id, "user_id")?;

    let users = UserRepository::new(db.pool());
    users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;

    let posts = PostRepository::new(db.pool());
    posts.list_all().await
}

/// Delete a post owned by the acting user.
pub async fn delete_post(db: &Database, user_id: &str, post_id: &str) -> Result<()> {
    validate::id(user_id, "user_id")?;
    validate::id(post_id, "post_id")?;

    let users = UserRepository::new(db.pool());
    let posts = PostRepository::new(db.pool());

    let (user, post) = tokio::try_join!(users.find_by_id(user_id), posts.find_by_id(post_id))?;

    user.ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;
    let post = post.ok_or_else(|| UnsocialError::NotFound("post".to_string()))?;

    if post.author != user_id {
        return Err(UnsocialError::Ownership(
            "user is not author of post".to_string(),
        ));
    }

    posts.delete(post_id).await?;

    info!(post_id = %post_id, author = %user_id, "post deleted");

    Ok(())
}

/// Toggle the acting user's like on a post.
///
/// Adds the user to the post's likes if absent, removes them if present,
/// then persists the post.
pub async fn toggle_like_post(db: &Database, user_id: &str, post_id: &str) -> Result<()> {
    validate::id(user_id, "user_id")?;
    validate::id(post_id, "post_id")?;

    let users = UserRepository::new(db.pool());
    let posts = PostRepository::new(db.pool());

    let (user, post) = tokio::try_join!(users.find_by_id(user_id), posts.find_by_id(post_id))?;

    user.ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;
    let mut post = post.ok_or_else(|| UnsocialError::NotFound("post".to_string()))?;

    let liked = post.toggle_like(user_id);
    posts.save(&post).await?;

    debug!(post_id = %post_id, user_id = %user_id, liked, "like toggled");

    Ok(())
}

//! Comment operations: adding to and removing from a post.
//!
//! Both operations load the acting user and the post concurrently, then
//! mutate the post's embedded comments and save the whole document.

use tracing::info;

use crate::db::{Database, UserRepository};
use crate::post::{Comment, PostRepository};
use crate::{validate, Result, UnsocialError};

/// Add a comment to a post on behalf of an existing user.
///
/// Returns the embedded comment, with its fresh id and timestamp.
pub async fn add_comment(
    db: &Database,
    user_id: &str,
    post_id: &str,
    text: &str,
) -> Result<Comment> {
    validate::id(user_id, "user_id")?;
    validate::id(post_id, "post_id")?;
    validate::text(text)?;

    let users = UserRepository::new(db.pool());
    let posts = PostRepository::new(db.pool());

    let (user, post) = tokio::try_join!(users.find_by_id(user_id), posts.find_by_id(post_id))?;

    user.ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;
    let mut post = post.ok_or_else(|| UnsocialError::NotFound("post".to_string()))?;

    let comment = post.add_comment(user_id, text);
    posts.save(&post).await?;

    info!(post_id = %post_id, comment_id = %comment.id, "comment added");

    Ok(comment)
}

/// Remove a comment from a post.
///
/// Only the comment's author may remove it. Exactly the targeted comment is
/// removed; its siblings are left intact.
pub async fn remove_comment(
    db: &Database,
    user_id: &str,
    post_id: &str,
    comment_id: &str,
) -> Result<()> {
    validate::id(user_id, "user_id")?;
    validate::id(post_id, "post_id")?;
    validate::id(comment_id, "comment_id")?;

    let users = UserRepository::new(db.pool());
    let posts = PostRepository::new(db.pool());

    let (user, post) = tokio::try_join!(users.find_by_id(user_id), posts.find_by_id(post_id))?;

    user.ok_or_else(|| UnsocialError::NotFound("user".to_string()))?;
    let mut post = post.ok_or_else(|| UnsocialError::NotFound("post".to_string()))?;

    let comment = post
        .comment(comment_id)
        .ok_or_else(|| UnsocialError::NotFound("comment".to_string()))?;

    if comment.author != user_id {
        return Err(UnsocialError::Ownership(
            "user is not author of comment".to_string(),
        ));
    }

    post.remove_comment(comment_id);
    posts.save(&post).await?;

    info!(post_id = %post_id, comment_id = %comment_id, "comment removed");

    Ok(())
}

//! Post repository for unsocial-core.
//!
//! Posts are stored as single rows whose `comments` and `likes` columns hold
//! the embedded documents as JSON, so fetch-mutate-save operates on the whole
//! post.

use chrono::{DateTime, Utc};

use super::types::{Comment, NewPost, Post};
use crate::db::{generate_id, DbPool};
use crate::{Result, UnsocialError};

/// Repository for post CRUD operations.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new post with a fresh id, current timestamp, and no
    /// comments or likes.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let post = Post {
            id: generate_id(),
            author: new_post.author.clone(),
            image: new_post.image.clone(),
            text: new_post.text.clone(),
            date: Utc::now(),
            comments: Vec::new(),
            likes: Vec::new(),
        };

        sqlx::query(
            "INSERT INTO posts (id, author, image, text, date, comments, likes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&post.id)
        .bind(&post.author)
        .bind(&post.image)
        .bind(&post.text)
        .bind(post.date.to_rfc3339())
        .bind(serde_json::to_string(&post.comments)?)
        .bind(serde_json::to_string(&post.likes)?)
        .execute(self.pool)
        .await?;

        Ok(post)
    }

    /// Find a post by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>> {
        let row: Option<PostRow> = sqlx::query_as(
            "SELECT id, author, image, text, date, comments, likes
             FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| row.into_post()))
    }

    /// List all posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let rows: Vec<PostRow> = sqlx::query_as(
            "SELECT id, author, image, text, date, comments, likes
             FROM posts ORDER BY date DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into_post()).collect())
    }

    /// Persist a mutated post document, embedded columns included.
    pub async fn save(&self, post: &Post) -> Result<()> {
        let result = sqlx::query(
            "UPDATE posts SET image = $1, text = $2, comments = $3, likes = $4
             WHERE id = $5",
        )
        .bind(&post.image)
        .bind(&post.text)
        .bind(serde_json::to_string(&post.comments)?)
        .bind(serde_json::to_string(&post.likes)?)
        .bind(&post.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(UnsocialError::NotFound("post".to_string()));
        }
        Ok(())
    }

    /// Delete a post by id.
    ///
    /// Returns true if a post was deleted, false if not found.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all posts.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Delete all posts. Intended for test setup.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM posts").execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// Internal struct for mapping database rows to Post.
#[derive(sqlx::FromRow)]
struct PostRow {
    id: String,
    author: String,
    image: String,
    text: String,
    date: String,
    comments: String,
    likes: String,
}

impl PostRow {
    fn into_post(self) -> Post {
        let date = DateTime::parse_from_rfc3339(&self.date)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_default();
        let comments: Vec<Comment> = serde_json::from_str(&self.comments).unwrap_or_default();
        let likes: Vec<String> = serde_json::from_str(&self.likes).unwrap_or_default();
        Post {
            id: self.id,
            author: self.author,
            image: self.image,
            text: self.text,
            date,
            comments,
            likes,
        }
    }
}

//! Post and comment models for unsocial-core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::generate_id;

/// Comment embedded in a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique object id, scoped within the parent post.
    pub id: String,
    /// Author user id.
    pub author: String,
    /// Comment text.
    pub text: String,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
}

/// Post entity with embedded comments and likes.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Unique object id (24 hex characters).
    pub id: String,
    /// Author user id.
    pub author: String,
    /// Image URL.
    pub image: String,
    /// Post text.
    pub text: String,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// Embedded comments, in insertion order.
    pub comments: Vec<Comment>,
    /// Ids of users who liked the post.
    pub likes: Vec<String>,
}

impl Post {
    /// Find an embedded comment by id.
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Append a new comment and return a copy of it.
    pub fn add_comment(&mut self, author: impl Into<String>, text: impl Into<String>) -> Comment {
        let comment = Comment {
            id: generate_id(),
            author: author.into(),
            text: text.into(),
            date: Utc::now(),
        };
        self.comments.push(comment.clone());
        comment
    }

    /// Remove an embedded comment by id, returning it if present.
    pub fn remove_comment(&mut self, comment_id: &str) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == comment_id)?;
        Some(self.comments.remove(index))
    }

    /// Check whether a user has liked this post.
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    /// Toggle a user's like. Returns true when the post is now liked.
    pub fn toggle_like(&mut self, user_id: &str) -> bool {
        match self.likes.iter().position(|id| id == user_id) {
            Some(index) => {
                self.likes.remove(index);
                false
            }
            None => {
                self.likes.push(user_id.to_string());
                true
            }
        }
    }
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Author user id.
    pub author: String,
    /// Image URL.
    pub image: String,
    /// Post text.
    pub text: String,
}

impl NewPost {
    /// Create new-post data.
    pub fn new(
        author: impl Into<String>,
        image: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            image: image.into(),
            text: text.into(),
        }
    }
}

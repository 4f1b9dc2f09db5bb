//! Post module for unsocial-core.
//!
//! Posts carry their comments and likes as embedded documents; mutations go
//! through the post and are persisted by saving the whole document.

mod repository;
mod types;

pub use repository::PostRepository;
pub use types::{Comment, NewPost, Post};

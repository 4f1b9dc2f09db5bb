//! unsocial-core — business-logic layer for the unsocial social network.
//!
//! Users publish image posts, comment on them, and like them. Each operation
//! validates its inputs, loads the referenced documents, enforces ownership
//! rules, and persists the mutation.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod logic;
pub mod post;
pub mod validate;

pub use config::Config;
pub use db::{Database, DbPool, NewUser, User, UserRepository};
pub use error::{Result, UnsocialError};
pub use logic::{
    add_comment, authenticate_user, create_post, delete_post, get_posts, get_user_name,
    register_user, remove_comment, toggle_like_post,
};
pub use post::{Comment, NewPost, Post, PostRepository};

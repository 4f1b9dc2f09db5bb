//! Business-logic operations for unsocial-core.
//!
//! Each operation is an independent async unit of work: validate inputs
//! synchronously, load the referenced documents, enforce ownership, mutate,
//! persist. No state is retained across calls and failures surface to the
//! caller verbatim.

mod comments;
mod posts;
mod users;

pub use comments::{add_comment, remove_comment};
pub use posts::{create_post, delete_post, get_posts, toggle_like_post};
pub use users::{authenticate_user, get_user_name, register_user};

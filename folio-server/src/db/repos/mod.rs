//! Repository implementations for database access
//!
//! Each repository borrows the pool and wraps one parameterized query per
//! operation:
//! - list operations compute comment counts with a JOIN (no N+1)
//! - view counts change only through a single `views = views + 1` UPDATE
//! - multi-step writes run in a transaction

pub mod content;
pub mod blog;
pub mod comments;

pub use content::{ContentItem, ContentRepo, ViewCount};
pub use blog::{BlogPost, BlogRepo};
pub use comments::{Comment, CommentRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

//! Blog post repository
//!
//! A blog row holds the body and author; date, title, views and the
//! comment count come from the content row it references.

use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use crate::models::{ContentId, Lang};
use super::DbError;

/// Blog post joined with its content metadata
#[derive(Debug, Clone, FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub content_id: i64,
    pub author: String,
    pub body: String,
    pub date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub views: i64,
    pub comments: i64,
    pub url: String,
}

/// Blog repository
pub struct BlogRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BlogRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the blog post for a content item in the given language.
    pub async fn get(&self, content_id: ContentId, lang: Lang) -> Result<BlogPost, DbError> {
        sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT
                b.id,
                b.content_id,
                b.author,
                b.body,
                c.date,
                c.title,
                c.description,
                c.views,
                (SELECT COUNT(*) FROM comments cm WHERE cm.content_id = c.id) AS comments,
                c.url
            FROM blog b
            JOIN content c ON c.id = b.content_id
            WHERE b.content_id = ? AND c.lang = ?
            "#,
        )
        .bind(content_id.get())
        .bind(lang.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "blog post",
            id: format!("{}/{}", content_id, lang),
        })
    }
}

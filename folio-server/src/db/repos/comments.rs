//! Comment repository
//!
//! Comments are append-only: there is no edit or delete path.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::models::{CommentText, ContentId, UserName};
use super::DbError;

/// Comment record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub content_id: i64,
    pub user_name: String,
    pub comment: String,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List comments for a content item in the order they were posted.
    pub async fn list_for_content(&self, content_id: ContentId) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, content_id, user_name, comment
            FROM comments
            WHERE content_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(content_id.get())
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Add a comment to a content item.
    pub async fn create(
        &self,
        content_id: ContentId,
        user_name: UserName,
        comment: CommentText,
    ) -> Result<Comment, DbError> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM content WHERE id = ?")
            .bind(content_id.get())
            .fetch_optional(&mut *tx)
            .await?;

        if exists.is_none() {
            return Err(DbError::NotFound {
                resource: "content",
                id: content_id.to_string(),
            });
        }

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (content_id, user_name, comment)
            VALUES (?, ?, ?)
            RETURNING id, content_id, user_name, comment
            "#,
        )
        .bind(content_id.get())
        .bind(user_name.as_str())
        .bind(comment.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(comment_id = comment.id, content_id = comment.content_id, "comment stored");
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};

    async fn seeded_pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        sqlx::query(
            "INSERT INTO content (id, type, lang, date, title, url) VALUES (5, 'blog', 'en', '2024-01-01', 'Hello', '/blog/hello')",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    #[tokio::test]
    async fn created_comment_is_listed() {
        let pool = seeded_pool().await;
        let repo = CommentRepo::new(&pool);
        let id = ContentId::new(5).unwrap();

        let first = repo
            .create(id, UserName::new("ana").unwrap(), CommentText::new("first!").unwrap())
            .await
            .unwrap();
        repo.create(id, UserName::new("bo").unwrap(), CommentText::new("second").unwrap())
            .await
            .unwrap();

        let listed = repo.list_for_content(id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], first);
        assert_eq!(listed[1].user_name, "bo");
    }

    #[tokio::test]
    async fn create_for_unknown_content_is_not_found() {
        let pool = seeded_pool().await;
        let err = CommentRepo::new(&pool)
            .create(
                ContentId::new(404).unwrap(),
                UserName::new("ana").unwrap(),
                CommentText::new("hi").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "content", .. }));

        let listed = CommentRepo::new(&pool)
            .list_for_content(ContentId::new(404).unwrap())
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}

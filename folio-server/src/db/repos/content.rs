//! Content repository
//!
//! Projects and blog-post metadata rows, one per language.
//! - list: LEFT JOIN with comment count, newest first
//! - increment_views: single UPDATE ... RETURNING

use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use crate::models::{ContentId, ContentType, Lang};
use super::DbError;

/// Content row with its comment count
#[derive(Debug, Clone, FromRow)]
pub struct ContentItem {
    pub id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub views: i64,
    pub comments: i64,
    pub url: String,
    pub entity: Option<String>,
}

/// View count after an increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct ViewCount {
    pub id: i64,
    pub views: i64,
}

/// Content repository
pub struct ContentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List content rows of one type in one language.
    ///
    /// Newest first; rows sharing a date are ordered by id, descending.
    pub async fn list(&self, kind: ContentType, lang: Lang) -> Result<Vec<ContentItem>, DbError> {
        let items = sqlx::query_as::<_, ContentItem>(
            r#"
            SELECT
                c.id,
                c.date,
                c.title,
                c.description,
                c.views,
                COUNT(cm.id) AS comments,
                c.url,
                c.entity
            FROM content c
            LEFT JOIN comments cm ON cm.content_id = c.id
            WHERE c.type = ? AND c.lang = ?
            GROUP BY c.id
            ORDER BY c.date DESC, c.id DESC
            "#,
        )
        .bind(kind.as_str())
        .bind(lang.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Add one view to a content row and return the new count.
    pub async fn increment_views(&self, id: ContentId) -> Result<ViewCount, DbError> {
        sqlx::query_as::<_, ViewCount>(
            "UPDATE content SET views = views + 1 WHERE id = ? RETURNING id, views",
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "content",
            id: id.to_string(),
        })
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
            r#"
            INSERT INTO content (id, type, lang, date, title, views, url) VALUES
                (1, 'blog', 'en', '2023-03-01', 'Older post', 4, '/blog/older'),
                (2, 'blog', 'en', '2024-06-15', 'Newer post', 0, '/blog/newer'),
                (3, 'blog', 'es', '2024-06-15', 'Entrada nueva', 0, '/blog/nueva'),
                (4, 'web-projects', 'en', '2022-01-10', 'A project', 0, 'https://example.com')
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO comments (content_id, user_name, comment) VALUES (1, 'a', 'x'), (1, 'b', 'y')",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    #[tokio::test]
    async fn list_filters_and_orders() {
        let pool = seeded_pool().await;
        let items = ContentRepo::new(&pool)
            .list(ContentType::Blog, Lang::En)
            .await
            .unwrap();

        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [2, 1]);
        assert_eq!(items[1].comments, 2);
        assert_eq!(items[0].comments, 0);
        assert_eq!(items[0].date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[tokio::test]
    async fn list_breaks_date_ties_by_newest_id() {
        let pool = seeded_pool().await;
        sqlx::query(
            r#"
            INSERT INTO content (id, type, lang, date, title, url) VALUES
                (20, 'data-projects', 'en', '2024-02-02', 'First', '/first'),
                (21, 'data-projects', 'en', '2024-02-02', 'Second', '/second')
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let items = ContentRepo::new(&pool)
            .list(ContentType::DataProjects, Lang::En)
            .await
            .unwrap();

        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [21, 20]);
    }

    #[tokio::test]
    async fn rejects_dates_that_are_not_plain_calendar_dates() {
        let pool = seeded_pool().await;
        for date in ["2024-05-01 10:00:00", "May 2024", "2024-5-1"] {
            let result = sqlx::query(
                "INSERT INTO content (type, lang, date, title, url) VALUES ('blog', 'en', ?, 't', '/t')",
            )
            .bind(date)
            .execute(&pool)
            .await;
            assert!(result.is_err(), "{date} should be rejected");
        }

        // Existing rows still decode
        let items = ContentRepo::new(&pool)
            .list(ContentType::Blog, Lang::En)
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn list_empty_for_unused_combination() {
        let pool = seeded_pool().await;
        let items = ContentRepo::new(&pool)
            .list(ContentType::DataProjects, Lang::Es)
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn increment_adds_exactly_one() {
        let pool = seeded_pool().await;
        let repo = ContentRepo::new(&pool);
        let id = ContentId::new(1).unwrap();

        assert_eq!(repo.increment_views(id).await.unwrap().views, 5);
        assert_eq!(repo.increment_views(id).await.unwrap().views, 6);
    }

    #[tokio::test]
    async fn increment_unknown_is_not_found() {
        let pool = seeded_pool().await;
        let err = ContentRepo::new(&pool)
            .increment_views(ContentId::new(99).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "content", .. }));
    }
}

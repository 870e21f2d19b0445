//! Schema migrations for the site tables
//!
//! Every statement is idempotent so this runs safely on each start.
//! Rows in `content` and `blog` are loaded out-of-band; only `comments`
//! and `content.views` are written through the API.

use sqlx::SqlitePool;

use super::repos::DbError;

const STATEMENTS: &[(&str, &str)] = &[
    (
        "content",
        r#"
        CREATE TABLE IF NOT EXISTS content (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL CHECK (type IN ('web-projects', 'data-projects', 'blog')),
            lang TEXT NOT NULL CHECK (lang IN ('en', 'es')),
            date TEXT NOT NULL CHECK (date IS date(date)),
            title TEXT NOT NULL,
            description TEXT,
            views INTEGER NOT NULL DEFAULT 0,
            url TEXT NOT NULL,
            entity TEXT
        )
        "#,
    ),
    (
        "blog",
        r#"
        CREATE TABLE IF NOT EXISTS blog (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content_id INTEGER NOT NULL UNIQUE REFERENCES content(id),
            author TEXT NOT NULL,
            body TEXT NOT NULL
        )
        "#,
    ),
    (
        "comments",
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content_id INTEGER NOT NULL REFERENCES content(id),
            user_name TEXT NOT NULL,
            comment TEXT NOT NULL
        )
        "#,
    ),
    (
        "idx_content_type_lang",
        "CREATE INDEX IF NOT EXISTS idx_content_type_lang ON content (type, lang)",
    ),
    (
        "idx_comments_content_id",
        "CREATE INDEX IF NOT EXISTS idx_comments_content_id ON comments (content_id)",
    ),
];

/// Run all migrations
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Running database migrations...");

    for &(name, sql) in STATEMENTS {
        tracing::debug!(migration = name, "applying");
        sqlx::query(sql).execute(pool).await?;
    }

    tracing::info!("Database migrations complete");
    Ok(())
}

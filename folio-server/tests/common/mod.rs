//! Shared fixtures for API tests

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use folio_server::db::{create_memory_pool, migrations};
use folio_server::{build_router, AppState, ServerConfig};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Router over a migrated in-memory database with a few rows
pub async fn test_app() -> (Router, SqlitePool) {
    test_app_with(&ServerConfig::default()).await
}

pub async fn test_app_with(config: &ServerConfig) -> (Router, SqlitePool) {
    let pool = create_memory_pool().await.expect("memory pool");
    migrations::run(&pool).await.expect("migrations");
    seed(&pool).await;
    (build_router(AppState::new(pool.clone()), config), pool)
}

async fn seed(pool: &SqlitePool) {
    sqlx::query(
        r#"
        INSERT INTO content (id, type, lang, date, title, description, views, url, entity) VALUES
            (1, 'blog', 'en', '2023-11-02', 'Shipping a static site', 'Notes on deploys', 10, '/blog/static-site', NULL),
            (2, 'blog', 'es', '2023-11-02', 'Publicar un sitio estático', 'Notas', 4, '/blog/sitio-estatico', NULL),
            (3, 'blog', 'en', '2024-04-20', 'Reading query plans', NULL, 0, '/blog/query-plans', NULL),
            (4, 'web-projects', 'en', '2022-08-01', 'Recipe app', 'Mobile app', 0, 'https://example.com/recipes', 'Freelance'),
            (5, 'data-projects', 'en', '2021-05-12', 'Air quality dashboard', NULL, 0, 'https://example.com/aq', 'University')
        "#,
    )
    .execute(pool)
    .await
    .expect("seed content");

    sqlx::query(
        r#"
        INSERT INTO blog (content_id, author, body) VALUES
            (1, 'Site Author', '# Shipping a static site'),
            (2, 'Site Author', '# Publicar un sitio estático'),
            (3, 'Site Author', '# Reading query plans')
        "#,
    )
    .execute(pool)
    .await
    .expect("seed blog");

    sqlx::query(
        "INSERT INTO comments (content_id, user_name, comment) VALUES (1, 'reader', 'Great write-up')",
    )
    .execute(pool)
    .await
    .expect("seed comments");
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn parse_json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, body))
}

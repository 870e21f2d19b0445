//! Route handlers organized by resource

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

pub mod health;
pub mod projects;
pub mod blog;
pub mod comments;

/// API routes: /api/*
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(projects::router())
        .merge(blog::router())
        .merge(comments::router())
}

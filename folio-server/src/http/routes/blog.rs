//! Blog post endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{BlogPost, BlogRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{require, ContentId, Lang};

/// Query parameters for GET /api/blog
#[derive(Debug, Default, Deserialize)]
pub struct BlogParams {
    pub id: Option<String>,
    pub lang: Option<String>,
}

/// Blog post response
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub content_id: i64,
    pub author: String,
    pub content: String,
    pub date: String,
    pub title: String,
    pub description: Option<String>,
    pub views: i64,
    pub comments: i64,
    pub url: String,
}

impl From<BlogPost> for BlogResponse {
    fn from(b: BlogPost) -> Self {
        Self {
            id: b.id,
            content_id: b.content_id,
            author: b.author,
            content: b.body,
            date: b.date.format("%Y-%m-%d").to_string(),
            title: b.title,
            description: b.description,
            views: b.views,
            comments: b.comments,
            url: b.url,
        }
    }
}

/// GET /api/blog?id=&lang= - a single post with its listing metadata
async fn get_post(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BlogParams>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id: ContentId = require(params.id.as_deref(), "id")?.parse()?;
    let lang: Lang = require(params.lang.as_deref(), "lang")?.parse()?;

    let post = BlogRepo::new(&state.pool)
        .get(id, lang)
        .await
        .map_err(ApiError::fetch)?;

    Ok(Json(BlogResponse::from(post)))
}

/// Blog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/blog", get(get_post))
}

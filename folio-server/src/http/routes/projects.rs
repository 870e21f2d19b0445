//! Content listing and view counting

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::db::repos::{ContentItem, ContentRepo, ViewCount};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{require, ContentType, Lang, RawId, ValidationError};

/// Query parameters for GET /api/projects
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub lang: Option<String>,
}

/// One row of a projects/blog listing
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub id: i64,
    pub date: String,
    pub year: i32,
    pub title: String,
    pub description: Option<String>,
    pub views: i64,
    pub comments: i64,
    pub url: String,
    pub entity: Option<String>,
}

impl From<ContentItem> for ContentResponse {
    fn from(c: ContentItem) -> Self {
        Self {
            id: c.id,
            date: c.date.format("%Y-%m-%d").to_string(),
            year: c.date.year(),
            title: c.title,
            description: c.description,
            views: c.views,
            comments: c.comments,
            url: c.url,
            entity: c.entity,
        }
    }
}

/// Body for PATCH /api/projects
#[derive(Debug, Deserialize)]
pub struct AddViewRequest {
    pub id: Option<RawId>,
}

/// Updated view count
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub id: i64,
    pub views: i64,
}

impl From<ViewCount> for ViewResponse {
    fn from(v: ViewCount) -> Self {
        Self {
            id: v.id,
            views: v.views,
        }
    }
}

/// GET /api/projects?type=&lang= - list content of one type in one language
async fn list_content(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ContentResponse>>, ApiError> {
    let kind: ContentType = require(params.kind.as_deref(), "type")?.parse()?;
    let lang: Lang = require(params.lang.as_deref(), "lang")?.parse()?;

    let items = ContentRepo::new(&state.pool)
        .list(kind, lang)
        .await
        .map_err(ApiError::fetch)?;

    tracing::debug!(%kind, %lang, count = items.len(), "listed content");
    Ok(Json(items.into_iter().map(ContentResponse::from).collect()))
}

/// PATCH /api/projects - count one view
async fn add_view(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddViewRequest>,
) -> Result<(StatusCode, Json<ViewResponse>), ApiError> {
    let id = req
        .id
        .ok_or(ValidationError::Missing { field: "id" })?
        .parse()?;

    let count = ContentRepo::new(&state.pool)
        .increment_views(id)
        .await
        .map_err(ApiError::save)?;

    Ok((StatusCode::CREATED, Json(ViewResponse::from(count))))
}

/// Content routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/projects", get(list_content).patch(add_view))
}

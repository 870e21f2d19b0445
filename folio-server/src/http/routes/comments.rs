//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{Comment, CommentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{require, CommentText, ContentId, RawId, UserName, ValidationError};

/// Query parameters for GET /api/comments
#[derive(Debug, Default, Deserialize)]
pub struct CommentParams {
    pub id: Option<String>,
}

/// Body for POST /api/comments
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub id: Option<RawId>,
    pub user_name: Option<String>,
    pub comment: Option<String>,
}

/// GET /api/comments?id= - comments for a content item, oldest first
async fn list_comments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommentParams>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let id: ContentId = require(params.id.as_deref(), "id")?.parse()?;

    let comments = CommentRepo::new(&state.pool)
        .list_for_content(id)
        .await
        .map_err(ApiError::fetch)?;

    Ok(Json(comments))
}

/// POST /api/comments - append a comment
async fn create_comment(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let id = req
        .id
        .ok_or(ValidationError::Missing { field: "id" })?
        .parse()?;
    let user_name = UserName::new(require(req.user_name.as_deref(), "user_name")?)?;
    let comment = CommentText::new(require(req.comment.as_deref(), "comment")?)?;

    let comment = CommentRepo::new(&state.pool)
        .create(id, user_name, comment)
        .await
        .map_err(ApiError::save)?;

    tracing::info!(content_id = comment.content_id, "comment posted");
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/comments", get(list_comments).post(create_comment))
}

//! API error types with IntoResponse
//!
//! Errors become plain-text responses: 400 for bad input, 404 for unknown
//! ids, 500 with the underlying error interpolated for database failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Whether a failed operation was reading or writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Save,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400)
    Validation(ValidationError),

    /// Request body could not be parsed (400)
    BadBody { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database { op: Operation, source: DbError },
}

impl ApiError {
    /// Wrap a repository error raised while reading.
    pub fn fetch(e: DbError) -> Self {
        Self::from_db(Operation::Fetch, e)
    }

    /// Wrap a repository error raised while writing.
    pub fn save(e: DbError) -> Self {
        Self::from_db(Operation::Save, e)
    }

    fn from_db(op: Operation, e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            source => Self::Database { op, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(e) => e.to_string(),
            Self::BadBody { message } => format!("invalid request body: {}", message),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::Database { op, source } => {
                tracing::error!(?op, "Database error: {}", source);
                match op {
                    Operation::Fetch => format!("failed to fetch data: {}", source),
                    Operation::Save => format!("failed to save data: {}", source),
                }
            }
        };

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

//! folio-server: JSON API for a bilingual portfolio and blog
//!
//! Serves project/blog listings, single blog posts, view counting and
//! comments over a SQLite database.

pub mod db;
pub mod http;
pub mod models;

pub use db::repos::DbError;
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};

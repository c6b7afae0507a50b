//! Static form page and public assets

use std::path::Path;

use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::error::AppError;

/// Router serving `index.html` at `/` and every other file of `dir` at its path
pub fn static_files(dir: &Path) -> Router {
    let assets = ServeDir::new(dir).not_found_service(not_found.into_service());

    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .fallback_service(assets)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

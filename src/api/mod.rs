//! API routes and handlers
//!
//! This module defines all API endpoints and their routing.

use axum::{http::Uri, routing::get, Router};

use crate::{utils::AppError, AppState};

pub mod courses;
pub mod docs;
pub mod health;

pub use health::*;

/// Course routes plus the root and health endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .nest("/v1/courses", courses::routes())
        .fallback(not_found)
}

/// Build the complete application router for the given state
///
/// The OpenAPI document is only mounted when enabled in the server config.
pub fn router(state: AppState) -> Router {
    let mut router = routes();
    if state.config.server.enable_openapi {
        router = router.route(docs::OPENAPI_PATH, get(docs::openapi_json));
    }

    router.with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

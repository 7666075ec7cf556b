//! Health check and root endpoints

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str =
    "Course Management API: Use REST API endpoints or Swagger UI to interact with the service.";

/// Basic health response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// API root
///
/// Returns a welcome message for the Course Management API.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Welcome text", body = String, content_type = "text/plain"))
)]
pub async fn root() -> &'static str {
    WELCOME_MESSAGE
}

/// Liveness probe
///
/// Returns 200 OK while the process is serving requests.
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

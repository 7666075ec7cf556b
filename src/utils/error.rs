//! Error types and handling
//!
//! Client errors are returned as `{"message": ...}`. Server errors are returned
//! as RFC 9457 problem details.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::services::CourseError;

const PROBLEM_TYPE_INTERNAL: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";
const PROBLEM_TITLE_INTERNAL: &str = "An error occurred while processing your request.";

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request - invalid input or a course that could not be stored (400)
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected failure, usually from storage (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of a 4xx response
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a 5xx response
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            problem_type: PROBLEM_TYPE_INTERNAL.to_string(),
            title: PROBLEM_TITLE_INTERNAL.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: Some(detail.into()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::BadRequest(message) => {
                (status, Json(MessageResponse::new(message))).into_response()
            }
            AppError::NotFound(what) => {
                let message = format!("Not found: {}", what);
                (status, Json(MessageResponse::new(message))).into_response()
            }
            AppError::Internal(detail) => {
                error!(error = %detail, "Request error");
                (
                    status,
                    [(header::CONTENT_TYPE, "application/problem+json")],
                    Json(ProblemDetails::internal(detail)),
                )
                    .into_response()
            }
        }
    }
}

impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::Validation(message) => AppError::BadRequest(message),
            CourseError::NotPersisted => {
                AppError::BadRequest(CourseError::NotPersisted.to_string())
            }
            CourseError::Storage(source) => AppError::Internal(format!("{:#}", source)),
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

//! Course API endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use crate::{
    models::{Course, CourseCreatedResponse, CreateCourseRequest, RecentCourse},
    services::CourseError,
    utils::{
        error::{MessageResponse, ProblemDetails},
        AppError, AppResult,
    },
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(add_course))
        .route("/top5", get(recent_courses))
}

/// Adds a new course
///
/// The title and description must not be empty and the title must be 200
/// characters or less. The type must be either 'public' or 'private'
/// (case-insensitive).
#[utoipa::path(
    post,
    path = "/v1/courses",
    tag = "courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 200, description = "Course added", body = CourseCreatedResponse),
        (status = 400, description = "Invalid course or course not stored", body = MessageResponse),
        (status = 500, description = "Unexpected error", body = ProblemDetails),
    )
)]
pub async fn add_course(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> AppResult<Json<CourseCreatedResponse>> {
    let Json(candidate) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected course payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let title = candidate.title.clone().unwrap_or_default();
    info!(title = %title, "Adding new course");

    match state.courses.add_course(candidate).await {
        Ok(course) => {
            info!(title = %course.title, course_id = %course.id, "Course added successfully");
            Ok(Json(CourseCreatedResponse::new(course.id)))
        }
        Err(CourseError::Validation(message)) => {
            warn!(message = %message, "Invalid course data");
            Err(AppError::BadRequest(message))
        }
        Err(err @ CourseError::NotPersisted) => {
            warn!(title = %title, "Failed to add course");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Retrieves all courses
#[utoipa::path(
    get,
    path = "/v1/courses",
    tag = "courses",
    responses(
        (status = 200, description = "All courses in storage order", body = Vec<Course>),
        (status = 500, description = "Unexpected error", body = ProblemDetails),
    )
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    info!("Retrieving courses");
    let courses = state.courses.get_all_courses().await?;
    info!(count = courses.len(), "Retrieved courses");

    Ok(Json(courses))
}

/// Retrieves the 5 most recently added courses, ordered by title
#[utoipa::path(
    get,
    path = "/v1/courses/top5",
    tag = "courses",
    responses(
        (status = 200, description = "Most recent courses ordered by title", body = Vec<RecentCourse>),
        (status = 500, description = "Unexpected error", body = ProblemDetails),
    )
)]
pub async fn recent_courses(State(state): State<AppState>) -> AppResult<Json<Vec<RecentCourse>>> {
    info!("Retrieving top 5 recently added courses");
    let courses: Vec<RecentCourse> = state
        .courses
        .get_recent_top5()
        .await?
        .into_iter()
        .map(RecentCourse::from)
        .collect();
    info!(count = courses.len(), "Retrieved recent courses");

    Ok(Json(courses))
}

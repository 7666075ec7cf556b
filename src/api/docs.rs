//! OpenAPI document

use axum::Json;
use utoipa::OpenApi;

use super::{courses, health};
use crate::models::{Course, CourseCreatedResponse, CourseType, CreateCourseRequest, RecentCourse};
use crate::utils::error::{MessageResponse, ProblemDetails};

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Course Management API", version = "v1"),
    paths(
        courses::add_course,
        courses::list_courses,
        courses::recent_courses,
        health::root,
        health::health_check,
    ),
    components(schemas(
        Course,
        CourseType,
        CreateCourseRequest,
        CourseCreatedResponse,
        RecentCourse,
        MessageResponse,
        ProblemDetails,
        health::HealthResponse,
    )),
    tags(
        (name = "courses", description = "Create and list courses"),
        (name = "meta", description = "Service metadata"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

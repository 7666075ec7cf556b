//! Course model and request/response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Visibility of a course
///
/// Accepted case-insensitively on input, always serialized as `Public` or `Private`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default, ToSchema)]
pub enum CourseType {
    #[default]
    Public,
    Private,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Public => "Public",
            CourseType::Private => "Private",
        }
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(CourseType::Public),
            "private" => Ok(CourseType::Private),
            _ => Err(format!("Invalid course type: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for CourseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A persisted course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub course_code: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    /// Set by the server when the course is accepted
    pub added_on: DateTime<Utc>,
}

/// Course candidate as submitted by a client
///
/// Any `id` or `added_on` in the body is ignored; both are assigned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    #[serde(default, alias = "Title")]
    pub title: Option<String>,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "courseCode", alias = "CourseCode")]
    pub course_code: String,
    /// `public` or `private`, any casing. Defaults to `Public` when omitted.
    ///
    /// `None` means the field was absent, `Some(None)` means it was `null`.
    #[serde(
        rename = "type",
        default,
        alias = "Type",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "public")]
    pub course_type: Option<Option<String>>,
}

/// Wraps any value that is present in the body, `null` included
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Body returned after a course was stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseCreatedResponse {
    pub message: String,
    pub course_id: Uuid,
}

impl CourseCreatedResponse {
    pub fn new(course_id: Uuid) -> Self {
        Self {
            message: "Course added successfully".to_string(),
            course_id,
        }
    }
}

/// Projection used by the recently-added listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RecentCourse {
    pub title: String,
    pub description: String,
    pub course_code: String,
    pub added_on: DateTime<Utc>,
}

impl From<Course> for RecentCourse {
    fn from(course: Course) -> Self {
        Self {
            title: course.title,
            description: course.description,
            course_code: course.course_code,
            added_on: course.added_on,
        }
    }
}

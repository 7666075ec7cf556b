//! Course service
//!
//! Validates incoming courses, stamps server-owned fields, and derives the
//! recently-added view on top of the [`CourseStore`].

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::db::CourseStore;
use crate::models::{Course, CourseType, CreateCourseRequest};
use crate::utils::validation::{is_blank, validate_description, validate_title, MAX_TITLE_CHARS};

/// Number of courses in the recently-added view
pub const RECENT_COURSES_LIMIT: usize = 5;

pub const INVALID_COURSE_TYPE: &str = "Invalid course type. Must be either 'public' or 'private'.";
pub const TITLE_REQUIRED: &str = "Course title is required.";
pub const TITLE_TOO_LONG: &str = "Course title must be 200 characters or less.";
pub const DESCRIPTION_REQUIRED: &str = "Course description is required.";

/// Why a course operation did not produce a result
#[derive(Debug, Error)]
pub enum CourseError {
    /// The candidate was rejected before reaching storage
    #[error("{0}")]
    Validation(String),

    /// Storage accepted the request but reported that nothing was written
    #[error("Failed to add course")]
    NotPersisted,

    /// Storage failed unexpectedly
    #[error("Course storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Check a candidate and return its normalized type
///
/// Checks run in a fixed order (type, title, description) and the first
/// failure is reported.
pub fn validate_candidate(candidate: &CreateCourseRequest) -> Result<CourseType, CourseError> {
    // An absent type defaults, an explicit null is as invalid as an unknown name
    let course_type = match &candidate.course_type {
        None => CourseType::default(),
        Some(raw) => raw
            .as_deref()
            .and_then(|raw| raw.parse::<CourseType>().ok())
            .ok_or_else(|| CourseError::Validation(INVALID_COURSE_TYPE.to_string()))?,
    };

    let title = candidate.title.as_deref();
    if is_blank(title) {
        return Err(CourseError::Validation(TITLE_REQUIRED.to_string()));
    }
    if !title.map(validate_title).unwrap_or(false) {
        debug!(max = MAX_TITLE_CHARS, "Course title over length limit");
        return Err(CourseError::Validation(TITLE_TOO_LONG.to_string()));
    }

    if !candidate.description.as_deref().map(validate_description).unwrap_or(false) {
        return Err(CourseError::Validation(DESCRIPTION_REQUIRED.to_string()));
    }

    Ok(course_type)
}

/// Order courses for the recently-added view
///
/// Recency picks which courses are included; title decides their order.
pub fn recent_by_title(mut courses: Vec<Course>, limit: usize) -> Vec<Course> {
    courses.sort_by(|a, b| b.added_on.cmp(&a.added_on));
    courses.truncate(limit);
    courses.sort_by(|a, b| a.title.cmp(&b.title));
    courses
}

pub struct CourseService {
    store: Arc<dyn CourseStore>,
}

impl CourseService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Validate and store a new course
    ///
    /// The id and `added_on` are always assigned here, whatever the caller sent.
    pub async fn add_course(&self, candidate: CreateCourseRequest) -> Result<Course, CourseError> {
        let course_type = validate_candidate(&candidate)?;

        let course = Course {
            id: Uuid::new_v4(),
            title: candidate.title.unwrap_or_default(),
            description: candidate.description.unwrap_or_default(),
            course_code: candidate.course_code,
            course_type,
            added_on: Utc::now(),
        };

        if self.store.insert(&course).await? {
            Ok(course)
        } else {
            Err(CourseError::NotPersisted)
        }
    }

    /// All courses, exactly as the store returns them
    pub async fn get_all_courses(&self) -> Result<Vec<Course>, CourseError> {
        Ok(self.store.find_all().await?)
    }

    /// The five most recently added courses, ordered by title
    pub async fn get_recent_top5(&self) -> Result<Vec<Course>, CourseError> {
        let courses = self.store.find_all().await?;
        Ok(recent_by_title(courses, RECENT_COURSES_LIMIT))
    }
}

//! Mock course stores for testing
//!
//! Stand-ins for the SQLite store that fail in controlled ways.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use course_management_api::{models::Course, CourseStore};

/// Store whose every call fails with the given error message
pub struct BrokenCourseStore {
    pub reason: String,
}

impl BrokenCourseStore {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl CourseStore for BrokenCourseStore {
    async fn insert(&self, _course: &Course) -> Result<bool> {
        Err(anyhow!("{}", self.reason))
    }

    async fn find_all(&self) -> Result<Vec<Course>> {
        Err(anyhow!("{}", self.reason))
    }
}

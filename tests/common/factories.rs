//! Test factories for generating test data
//!
//! Factories create unique course payloads, useful when a test needs many
//! distinct courses.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{json, Value};

/// Factory for creating course candidates
pub struct CourseFactory {
    counter: AtomicU64,
}

impl Default for CourseFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseFactory {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Start building a unique course candidate
    pub fn create(&self) -> CourseBuilder {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        CourseBuilder {
            title: Some(format!("Course {}", n)),
            description: Some(format!("Description of course {}", n)),
            course_code: format!("C-{:03}", n),
            course_type: Some("public".to_string()),
        }
    }
}

/// Builder for course candidates
pub struct CourseBuilder {
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_code: String,
    pub course_type: Option<String>,
}

impl CourseBuilder {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_type(mut self, course_type: &str) -> Self {
        self.course_type = Some(course_type.to_string());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn without_type(mut self) -> Self {
        self.course_type = None;
        self
    }

    /// JSON body as a client would send it
    pub fn build(self) -> Value {
        let mut body = json!({ "course_code": self.course_code });
        if let Some(title) = self.title {
            body["title"] = json!(title);
        }
        if let Some(description) = self.description {
            body["description"] = json!(description);
        }
        if let Some(course_type) = self.course_type {
            body["type"] = json!(course_type);
        }
        body
    }
}

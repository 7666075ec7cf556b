//! Test fixtures for common test data
//!
//! Fixtures provide pre-defined course payloads used across multiple tests.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use course_management_api::models::{Course, CourseType};

/// Fixed UUIDs for testing (reproducible tests)
pub mod ids {
    use uuid::Uuid;

    pub const CLIENT_SUPPLIED_ID: Uuid = Uuid::from_u128(0x12345678_1234_1234_1234_123456789abc);
}

/// Course payload fixtures
pub struct CourseFixtures;

impl CourseFixtures {
    /// A valid public course candidate
    pub fn rust_basics() -> Value {
        json!({
            "title": "Rust Basics",
            "description": "Ownership, borrowing and lifetimes",
            "course_code": "RS-101",
            "type": "public"
        })
    }

    /// A valid private course candidate using camelCase field names
    pub fn async_rust_camel_case() -> Value {
        json!({
            "title": "Async Rust",
            "description": "Futures and executors",
            "courseCode": "RS-201",
            "type": "Private"
        })
    }

    /// A candidate with a custom title and type
    pub fn with_title_and_type(title: &str, course_type: &str) -> Value {
        json!({
            "title": title,
            "description": format!("About {}", title),
            "course_code": "GEN-1",
            "type": course_type
        })
    }
}

/// A stored course, as a store would hold it
pub fn stored_course(title: &str, added_on: DateTime<Utc>) -> Course {
    Course {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("About {}", title),
        course_code: format!("CODE-{}", title.len()),
        course_type: CourseType::Public,
        added_on,
    }
}

/// Courses added one minute apart, in the order given
pub fn courses_added_in_order(titles: &[&str]) -> Vec<Course> {
    let start = Utc::now() - Duration::hours(1);
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| stored_course(title, start + Duration::minutes(i as i64)))
        .collect()
}

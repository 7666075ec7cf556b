//! Business logic services

pub mod course;

pub use course::{CourseError, CourseService, RECENT_COURSES_LIMIT};

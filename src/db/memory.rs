//! In-memory course store
//!
//! Used by tests and local experiments. Can be switched into a mode where
//! every insert reports that nothing was written.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CourseStore;
use crate::models::Course;

#[derive(Debug, Default)]
pub struct InMemoryCourseStore {
    courses: RwLock<Vec<Course>>,
    reject_inserts: AtomicBool,
    insert_calls: AtomicUsize,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with courses, kept in the given order
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
            ..Self::default()
        }
    }

    /// When set, `insert` stores nothing and returns `false`
    pub fn set_reject_inserts(&self, reject: bool) {
        self.reject_inserts.store(reject, Ordering::SeqCst);
    }

    /// Number of times `insert` was called, accepted or not
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn insert(&self, course: &Course) -> Result<bool> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_inserts.load(Ordering::SeqCst) {
            return Ok(false);
        }

        self.courses.write().await.push(course.clone());
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Course>> {
        Ok(self.courses.read().await.clone())
    }
}

//! Course Management API Library
//!
//! This crate provides the course model, its storage, the validation and
//! query logic, and the HTTP routes of the Course Management API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod utils;

pub use config::AppConfig;
pub use db::{CourseStore, DbPool};
pub use services::CourseService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Course validation and queries
    pub courses: Arc<CourseService>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn CourseStore>) -> Self {
        Self {
            config,
            courses: Arc::new(CourseService::new(store)),
        }
    }
}

//! Data models

mod course;

pub use course::*;

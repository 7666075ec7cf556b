//! Cucumber features for the course endpoints

pub mod step_definitions;

pub use support::TestWorld;

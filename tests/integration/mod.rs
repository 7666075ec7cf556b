//! Integration tests for the Course Management API
//!
//! These tests exercise the HTTP routes and the SQLite store against a
//! temporary database file.

mod repository_tests;

//! Build script for course-management-api
//!
//! `sqlx::migrate!` embeds the SQL files under `migrations/` at compile time,
//! so the crate has to be rebuilt whenever one of them changes.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=migrations");

    let migrations_dir = Path::new("migrations");
    if !migrations_dir.exists() {
        println!("cargo:warning=migrations directory not found, the course table will not be created");
        return;
    }

    // Track each migration file so edits to an existing file also trigger a rebuild
    if let Ok(entries) = fs::read_dir(migrations_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|ext| ext == "sql").unwrap_or(false) {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

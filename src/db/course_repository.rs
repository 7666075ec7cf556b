//! Course repository - storage port and its SQLite implementation

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Course, CourseType};

/// Storage operations the course service depends on
///
/// Courses are append-only: there is no update, delete or lookup by field.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Persist a course. Returns `true` iff the record was written.
    async fn insert(&self, course: &Course) -> Result<bool>;

    /// All stored courses, in storage order.
    async fn find_all(&self) -> Result<Vec<Course>>;
}

#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: String,
    title: String,
    description: String,
    course_code: String,
    #[sqlx(rename = "type")]
    course_type: String,
    added_on: String,
}

impl TryFrom<CourseRow> for Course {
    type Error = anyhow::Error;

    fn try_from(row: CourseRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .with_context(|| format!("Invalid course id in database: {}", row.id))?;
        let course_type = row
            .course_type
            .parse::<CourseType>()
            .map_err(|e| anyhow!("Course {}: {}", row.id, e))?;
        let added_on = DateTime::parse_from_rfc3339(&row.added_on)
            .with_context(|| format!("Invalid added_on for course {}: {}", row.id, row.added_on))?
            .with_timezone(&Utc);

        Ok(Course {
            id,
            title: row.title,
            description: row.description,
            course_code: row.course_code,
            course_type,
            added_on,
        })
    }
}

/// Course store backed by the `courses` table of the embedded SQLite database
#[derive(Clone)]
pub struct SqliteCourseStore {
    pool: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn insert(&self, course: &Course) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses (id, title, description, course_code, type, added_on)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(course.id.to_string())
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.course_code)
        .bind(course.course_type.as_str())
        .bind(course.added_on.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to insert course")?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_all(&self) -> Result<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, description, course_code, type, added_on
            FROM courses
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list courses")?;

        rows.into_iter().map(Course::try_from).collect()
    }
}

//! Input validation utilities

/// Maximum course title length, in characters
pub const MAX_TITLE_CHARS: usize = 200;

/// True when the value is missing, empty or only whitespace
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

/// Validate a course title (present and within the length limit)
pub fn validate_title(title: &str) -> bool {
    !title.trim().is_empty() && title.chars().count() <= MAX_TITLE_CHARS
}

/// Validate a course description
pub fn validate_description(description: &str) -> bool {
    !description.trim().is_empty()
}

//! Lesson-list normalization.
//!
//! Both the partitioner and the resource aggregator read lessons through
//! [`split_lessons`], so a given input string always yields the same lesson
//! sequence in both places.

use crate::errors::PlanError;

/// Separator between lessons in the raw input.
pub const LESSON_SEPARATOR: char = ',';

/// Separator used when joining a day's lessons into task text.
pub const JOINED_SEPARATOR: &str = ", ";

/// Split a comma-separated lesson string into trimmed, non-empty lessons.
///
/// Order and duplicates are preserved. Empty segments (from `",,"`, a
/// trailing comma, or whitespace-only entries) are dropped.
#[must_use]
pub fn split_lessons(raw: &str) -> Vec<String> {
    raw.split(LESSON_SEPARATOR)
        .map(str::trim)
        .filter(|lesson| !lesson.is_empty())
        .map(String::from)
        .collect()
}

/// Split a lesson string and require at least one lesson.
///
/// # Errors
///
/// Returns [`PlanError::EmptyLessonList`] when normalization leaves nothing.
pub fn require_lessons(raw: &str) -> Result<Vec<String>, PlanError> {
    let lessons = split_lessons(raw);
    if lessons.is_empty() {
        return Err(PlanError::EmptyLessonList);
    }
    Ok(lessons)
}

/// Join lessons the way they appear in a day's study task.
#[must_use]
pub fn join_lessons(lessons: &[String]) -> String {
    lessons.join(JOINED_SEPARATOR)
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One day of a study plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyDay {
    /// 1-based day number, contiguous within a plan.
    pub day: u32,
    /// The chunk of lessons assigned to this day (may be empty).
    pub lessons: Vec<String>,
    pub tasks: Vec<String>,
    pub quiz: bool,
    pub review: bool,
}

impl StudyDay {
    /// A day whose chunk ran past the end of the lesson list.
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.lessons.is_empty()
    }
}

/// A full day-by-day schedule for one request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyPlan {
    pub topic: String,
    /// Normalized lessons in input order.
    pub lessons: Vec<String>,
    pub days: Vec<StudyDay>,
}

impl StudyPlan {
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn duration_days(&self) -> usize {
        self.days.len()
    }
}

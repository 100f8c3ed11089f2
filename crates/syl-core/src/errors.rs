//! Input-validation errors for plan generation and resource requests.
//!
//! Search failures are not represented here: they are recovered per lesson
//! inside `syl-search` and never reach the caller.

use thiserror::Error;

/// Errors raised while validating a study request.
///
/// Every variant is fatal to the single request that produced it; no partial
/// plan is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The duration is not a positive base-10 integer.
    #[error("Invalid duration '{raw}': expected a positive whole number of days")]
    InvalidDuration { raw: String },

    /// The duration parsed but exceeds the configured ceiling.
    #[error("Duration of {days} days exceeds the maximum of {max}")]
    DurationTooLong { days: u32, max: u32 },

    /// The topic is empty or whitespace only.
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// The lesson list contains no non-empty entries after trimming.
    #[error("Lesson list must contain at least one non-empty lesson")]
    EmptyLessonList,
}

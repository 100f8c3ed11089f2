//! Lesson-to-day partitioning.
//!
//! Lessons are cut into fixed-size chunks of `ceil(lessons / days)`. This is
//! not a balanced distribution: when `days * chunk` overshoots the lesson
//! count, the trailing days get empty chunks and become general review days.
//!
//! ```text
//! 4 lessons, 3 days -> chunk 2 -> [A, B] [C, D] []
//! 1 lesson,  2 days -> chunk 1 -> [A] []
//! ```

use crate::entities::{StudyConfig, StudyDay, StudyPlan};
use crate::errors::PlanError;
use crate::lessons::join_lessons;

/// Default ceiling on plan length.
pub const DEFAULT_MAX_DAYS: u32 = 365;

pub const TASK_STUDY_PREFIX: &str = "Study ";
pub const TASK_REVIEW: &str = "Review key concepts";
pub const TASK_PRACTICE: &str = "Complete practice exercises";
pub const TASK_QUIZ: &str = "Take quiz on covered topics";
pub const TASK_GENERAL_REVIEW: &str = "General review";

/// Splits a study request into a day-by-day plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    max_days: u32,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DAYS)
    }
}

impl Partitioner {
    #[must_use]
    pub const fn new(max_days: u32) -> Self {
        Self { max_days }
    }

    #[must_use]
    pub const fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Build a plan with exactly `duration` days numbered `1..=duration`.
    ///
    /// The exact-length guarantee holds for durations up to `max_days`;
    /// longer durations are rejected rather than truncated.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanError`] if the topic is blank, the duration is not a
    /// positive integer or exceeds the ceiling, or no lessons remain after
    /// normalization. Validation completes before any day is built.
    pub fn partition(&self, config: &StudyConfig) -> Result<StudyPlan, PlanError> {
        let study = config.validate()?;
        if study.days > self.max_days {
            return Err(PlanError::DurationTooLong {
                days: study.days,
                max: self.max_days,
            });
        }

        let days = study.days as usize;
        let per_day = study.lessons.len().div_ceil(days);

        let plan_days = (0..days)
            .map(|index| {
                let chunk = chunk_at(&study.lessons, index, per_day);
                build_day(index, chunk)
            })
            .collect();

        Ok(StudyPlan {
            topic: study.topic,
            lessons: study.lessons,
            days: plan_days,
        })
    }
}

/// Partition with the default day ceiling.
///
/// Plans are exact-length only up to [`DEFAULT_MAX_DAYS`] days.
///
/// # Errors
///
/// See [`Partitioner::partition`].
pub fn partition(config: &StudyConfig) -> Result<StudyPlan, PlanError> {
    Partitioner::default().partition(config)
}

/// Slice `[index * size, (index + 1) * size)`, clamped to the list end.
fn chunk_at(lessons: &[String], index: usize, size: usize) -> &[String] {
    let start = index.saturating_mul(size).min(lessons.len());
    let end = start.saturating_add(size).min(lessons.len());
    &lessons[start..end]
}

fn build_day(index: usize, chunk: &[String]) -> StudyDay {
    let closing = if chunk.is_empty() {
        TASK_GENERAL_REVIEW
    } else {
        TASK_QUIZ
    };

    StudyDay {
        // index < days <= u32::MAX
        day: u32::try_from(index + 1).unwrap_or(u32::MAX),
        lessons: chunk.to_vec(),
        tasks: vec![
            format!("{TASK_STUDY_PREFIX}{}", join_lessons(chunk)),
            TASK_REVIEW.to_string(),
            TASK_PRACTICE.to_string(),
            closing.to_string(),
        ],
        quiz: true,
        review: true,
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::duration::parse_duration;
use crate::errors::PlanError;
use crate::lessons::require_lessons;

/// Raw "generate plan" request exactly as the user supplied it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyConfig {
    pub topic: String,
    /// Number of days, still as text.
    pub duration: String,
    /// Comma-separated lessons.
    pub lessons: String,
}

/// Raw "fetch resources" request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResourceRequest {
    pub topic: String,
    /// Comma-separated lessons.
    pub lessons: String,
}

/// A [`StudyConfig`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedStudy {
    pub topic: String,
    pub days: u32,
    pub lessons: Vec<String>,
}

/// A [`ResourceRequest`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResources {
    pub topic: String,
    pub lessons: Vec<String>,
}

fn require_topic(raw: &str) -> Result<String, PlanError> {
    let topic = raw.trim();
    if topic.is_empty() {
        return Err(PlanError::EmptyTopic);
    }
    Ok(topic.to_string())
}

impl StudyConfig {
    pub fn new(
        topic: impl Into<String>,
        duration: impl Into<String>,
        lessons: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            duration: duration.into(),
            lessons: lessons.into(),
        }
    }

    /// Validate topic, duration, and lessons, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlanError`] encountered.
    pub fn validate(&self) -> Result<ValidatedStudy, PlanError> {
        let topic = require_topic(&self.topic)?;
        let days = parse_duration(&self.duration)?;
        let lessons = require_lessons(&self.lessons)?;
        Ok(ValidatedStudy {
            topic,
            days,
            lessons,
        })
    }

    /// The resource request for the same topic and lessons.
    #[must_use]
    pub fn resource_request(&self) -> ResourceRequest {
        ResourceRequest {
            topic: self.topic.clone(),
            lessons: self.lessons.clone(),
        }
    }
}

impl ResourceRequest {
    pub fn new(topic: impl Into<String>, lessons: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            lessons: lessons.into(),
        }
    }

    /// Validate topic and lessons.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::EmptyTopic`] or [`PlanError::EmptyLessonList`].
    pub fn validate(&self) -> Result<ValidatedResources, PlanError> {
        let topic = require_topic(&self.topic)?;
        let lessons = require_lessons(&self.lessons)?;
        Ok(ValidatedResources { topic, lessons })
    }
}

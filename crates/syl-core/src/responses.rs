//! CLI response types returned as JSON by `syl` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Resource, StudyPlan};

/// Response from `syl resources`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResourcesResponse {
    pub topic: String,
    pub resources: Vec<Resource>,
    pub total_resources: u32,
}

impl ResourcesResponse {
    #[must_use]
    pub fn new(topic: impl Into<String>, resources: Vec<Resource>) -> Self {
        let total_resources = u32::try_from(resources.len()).unwrap_or(u32::MAX);
        Self {
            topic: topic.into(),
            resources,
            total_resources,
        }
    }
}

/// Response from `syl prepare`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PrepareResponse {
    pub plan: StudyPlan,
    pub resources: Vec<Resource>,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ResourceKind;

/// An external learning resource found for a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// The lesson whose search produced this resource.
    pub lesson: String,
}

impl Resource {
    /// Build a resource, classifying it by URL.
    pub fn from_search_hit(
        title: impl Into<String>,
        url: impl Into<String>,
        lesson: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            title: title.into(),
            kind: ResourceKind::classify(&url),
            url,
            lesson: lesson.into(),
        }
    }
}

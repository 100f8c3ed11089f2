//! Enumerations shared across Syllabus crates.
//!
//! All enums use lowercase serialization to match the JSON shape consumed by
//! the storage layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// Kind of a learning resource.
///
/// `Tutorial` is part of the stored data model but [`ResourceKind::classify`]
/// never produces it: only `Video` and `Article` are reachable from a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Video,
    Tutorial,
}

impl ResourceKind {
    /// Host fragment that marks a URL as a video.
    pub const VIDEO_HOST: &'static str = "youtube.com";

    /// Classify a resource by its URL.
    ///
    /// Any URL containing `youtube.com` is a video; everything else is an article.
    #[must_use]
    pub fn classify(url: &str) -> Self {
        if url.contains(Self::VIDEO_HOST) {
            Self::Video
        } else {
            Self::Article
        }
    }

    /// Return the string representation used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

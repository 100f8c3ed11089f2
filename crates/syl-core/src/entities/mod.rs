//! Value types for study requests, plans, and resources.
//!
//! Every entity is constructed fresh per request and never mutated afterwards.
//! Record identifiers and timestamps belong to the storage layer and are not
//! modelled here. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod plan;
mod request;
mod resource;

pub use plan::{StudyDay, StudyPlan};
pub use request::{ResourceRequest, StudyConfig, ValidatedResources, ValidatedStudy};
pub use resource::Resource;

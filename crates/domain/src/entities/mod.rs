//! Entities - transient values produced by a single plant lookup

mod environment_profile;
mod lookup_result;
mod plant_candidate;

pub use environment_profile::EnvironmentProfile;
pub use lookup_result::{LookupResult, MAX_COMMON_PLANTS};
pub use plant_candidate::PlantCandidate;

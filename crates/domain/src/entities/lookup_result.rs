//! Lookup result returned to clients

use serde::{Deserialize, Serialize};

use super::{EnvironmentProfile, PlantCandidate};
use crate::value_objects::Hemisphere;

/// Upper bound on the number of plants in a lookup result
pub const MAX_COMMON_PLANTS: usize = 5;

/// Plant summary for a location
///
/// Serialized shape:
/// `{ commonPlants: [...], soilType, averageRainfall, growingSeason }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Candidate species in upstream order, at most [`MAX_COMMON_PLANTS`]
    pub common_plants: Vec<PlantCandidate>,
    #[serde(flatten)]
    pub environment: EnvironmentProfile,
}

impl LookupResult {
    /// Build a result, keeping only the first [`MAX_COMMON_PLANTS`] candidates
    #[must_use]
    pub fn new(
        candidates: impl IntoIterator<Item = PlantCandidate>,
        hemisphere: Hemisphere,
    ) -> Self {
        Self {
            common_plants: candidates.into_iter().take(MAX_COMMON_PLANTS).collect(),
            environment: EnvironmentProfile::for_hemisphere(hemisphere),
        }
    }
}

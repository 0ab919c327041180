//! Hemisphere-derived environment descriptors
//!
//! These strings are generic placeholders picked by hemisphere alone; no
//! climate or soil data is consulted.

use serde::{Deserialize, Serialize};

use crate::value_objects::Hemisphere;

/// Soil, rainfall and growing-season text for a hemisphere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentProfile {
    pub soil_type: String,
    pub average_rainfall: String,
    pub growing_season: String,
}

impl EnvironmentProfile {
    #[must_use]
    pub fn for_hemisphere(hemisphere: Hemisphere) -> Self {
        let (soil_type, average_rainfall, growing_season) = match hemisphere {
            Hemisphere::Northern => (
                "Varies, often loamy",
                "Varies by region",
                "Typically April to October",
            ),
            Hemisphere::Southern => (
                "Varies, often sandy or clay-rich",
                "Often higher in tropical regions",
                "Often year-round in tropical areas",
            ),
        };

        Self {
            soil_type: soil_type.to_string(),
            average_rainfall: average_rainfall.to_string(),
            growing_season: growing_season.to_string(),
        }
    }
}

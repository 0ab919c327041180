//! Plant lookup service
//!
//! Validates submitted coordinates, asks the identification port about the
//! configured reference image, and assembles the location summary.

use std::sync::Arc;

use domain::{Coordinates, LookupResult, ZeroCoordinatePolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    lookup_request::LookupRequest,
    ports::{IdentificationQuery, PlantIdentificationPort},
};

/// Image identified when the caller does not supply one
pub const DEFAULT_REFERENCE_IMAGE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5d/Flowering_Malus_domestica_%28apple_tree%29.jpg/640px-Flowering_Malus_domestica_%28apple_tree%29.jpg";

/// Settings for the lookup use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSettings {
    /// Image sent to the identification service with every lookup
    #[serde(default = "default_reference_image_url")]
    pub reference_image_url: String,

    /// Ask for similar-image matches (default: true)
    #[serde(default = "default_similar_images")]
    pub similar_images: bool,

    /// Whether a coordinate of exactly zero counts as missing
    #[serde(default)]
    pub zero_coordinates: ZeroCoordinatePolicy,
}

fn default_reference_image_url() -> String {
    DEFAULT_REFERENCE_IMAGE_URL.to_string()
}

const fn default_similar_images() -> bool {
    true
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            reference_image_url: default_reference_image_url(),
            similar_images: default_similar_images(),
            zero_coordinates: ZeroCoordinatePolicy::default(),
        }
    }
}

/// Plant lookup use case
pub struct PlantLookupService {
    identification: Arc<dyn PlantIdentificationPort>,
    settings: LookupSettings,
}

impl std::fmt::Debug for PlantLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlantLookupService")
            .field("identification", &"<PlantIdentificationPort>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl PlantLookupService {
    /// Create a service with default settings
    pub fn new(identification: Arc<dyn PlantIdentificationPort>) -> Self {
        Self::with_settings(identification, LookupSettings::default())
    }

    /// Create a service with explicit settings
    pub fn with_settings(
        identification: Arc<dyn PlantIdentificationPort>,
        settings: LookupSettings,
    ) -> Self {
        Self {
            identification,
            settings,
        }
    }

    /// Current settings
    pub const fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// Whether the identification backend has credentials
    pub fn is_ready(&self) -> bool {
        self.identification.is_configured()
    }

    /// Check the raw request and return usable coordinates
    pub fn validate(&self, request: &LookupRequest) -> Result<Coordinates, ApplicationError> {
        Ok(Coordinates::from_fields(
            request.latitude.as_ref(),
            request.longitude.as_ref(),
            self.settings.zero_coordinates,
        )?)
    }

    /// Look up common plants and environment text for a location
    ///
    /// The result holds at most [`domain::MAX_COMMON_PLANTS`] plants in the
    /// order the identification service returned them.
    #[instrument(skip(self, request))]
    pub async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, ApplicationError> {
        let coordinates = self.validate(request)?;
        let hemisphere = coordinates.hemisphere();

        info!(
            latitude = coordinates.latitude(),
            longitude = coordinates.longitude(),
            hemisphere = %hemisphere,
            "Looking up plants for location"
        );

        let query = IdentificationQuery {
            images: vec![self.settings.reference_image_url.clone()],
            coordinates,
            similar_images: self.settings.similar_images,
        };

        let candidates = self.identification.identify(&query).await?;
        debug!(candidates = candidates.len(), "Identification completed");

        Ok(LookupResult::new(candidates, hemisphere))
    }
}

//! Plant identification port
//!
//! Defines the interface for identifying plants from images and a location.

use async_trait::async_trait;
use domain::{Coordinates, PlantCandidate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// What to identify and where
#[derive(Debug, Clone, PartialEq)]
pub struct IdentificationQuery {
    /// Image URLs submitted for identification
    pub images: Vec<String>,
    /// Location the images were taken at
    pub coordinates: Coordinates,
    /// Request similar-image matches with each suggestion
    pub similar_images: bool,
}

/// Port for plant identification services
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlantIdentificationPort: Send + Sync {
    /// Identify plants, returning every candidate in the service's order
    ///
    /// Implementations must fail with [`ApplicationError::Configuration`]
    /// without contacting the service when credentials are missing.
    async fn identify(
        &self,
        query: &IdentificationQuery,
    ) -> Result<Vec<PlantCandidate>, ApplicationError>;

    /// Whether credentials for the service are configured
    fn is_configured(&self) -> bool;
}

//! Plant.id adapter - Implements PlantIdentificationPort using integration_plantid

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{IdentificationQuery, PlantIdentificationPort};
use async_trait::async_trait;
use domain::{MAX_COMMON_PLANTS, PlantCandidate};
use integration_plantid::{
    IdentificationRequest, PlantIdClient, PlantIdConfig, PlantIdError, PlantIdHttpClient,
    Suggestion,
};
use tracing::{instrument, warn};

/// Message returned when no API key is configured
pub const MISSING_API_KEY_MESSAGE: &str = "Plant.id API key is not set in environment variables";

/// Adapter for plant identification using the Plant.id API
pub struct PlantIdAdapter {
    client: Arc<dyn PlantIdClient>,
}

impl std::fmt::Debug for PlantIdAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlantIdAdapter")
            .field("client", &"PlantIdClient")
            .field("configured", &self.client.is_configured())
            .finish()
    }
}

impl PlantIdAdapter {
    /// Create an adapter backed by the Plant.id HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: PlantIdConfig) -> Result<Self, ApplicationError> {
        let client =
            PlantIdHttpClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    pub fn with_client(client: Arc<dyn PlantIdClient>) -> Self {
        Self { client }
    }

    /// Map integration error to application error
    fn map_error(err: PlantIdError) -> ApplicationError {
        match err {
            PlantIdError::MissingApiKey => {
                ApplicationError::Configuration(MISSING_API_KEY_MESSAGE.to_string())
            },
            PlantIdError::Status { status, message } => ApplicationError::UpstreamStatus {
                status,
                detail: message,
            },
            PlantIdError::NoResponse(_) => ApplicationError::UpstreamUnreachable,
            PlantIdError::RequestSetup(e) | PlantIdError::ParseError(e) => {
                ApplicationError::RequestSetup(e)
            },
        }
    }

    /// Convert a Plant.id suggestion into a domain candidate
    fn map_suggestion(suggestion: Suggestion) -> PlantCandidate {
        let image = suggestion.image_url().map(str::to_string);
        let Suggestion { name, details } = suggestion;

        PlantCandidate {
            name,
            scientific_name: details.scientific_name,
            family: details.taxonomy.family,
            genus: details.taxonomy.genus,
            image,
        }
    }
}

#[async_trait]
impl PlantIdentificationPort for PlantIdAdapter {
    #[instrument(skip(self, query), fields(coordinates = %query.coordinates))]
    async fn identify(
        &self,
        query: &IdentificationQuery,
    ) -> Result<Vec<PlantCandidate>, ApplicationError> {
        let request = IdentificationRequest {
            images: query.images.clone(),
            latitude: query.coordinates.latitude(),
            longitude: query.coordinates.longitude(),
            similar_images: query.similar_images,
            max_suggestions: Some(MAX_COMMON_PLANTS),
        };

        let suggestions = self.client.identify(&request).await.map_err(|e| {
            warn!(error = %e, "Error fetching from Plant.id API");
            Self::map_error(e)
        })?;

        Ok(suggestions.into_iter().map(Self::map_suggestion).collect())
    }

    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }
}

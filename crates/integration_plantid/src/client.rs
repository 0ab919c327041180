//! Plant.id HTTP client
//!
//! HTTP client for the Plant.id v3 identification endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    config::PlantIdConfig,
    error::PlantIdError,
    models::{IdentificationRequest, IdentificationResponse, Suggestion},
};

/// Header carrying the Plant.id API key
const API_KEY_HEADER: &str = "Api-Key";

/// Path of the identification endpoint, relative to the base URL
const IDENTIFICATION_PATH: &str = "/api/v3/identification";

/// Plant identification client trait
#[async_trait]
pub trait PlantIdClient: Send + Sync {
    /// Submit an identification request and return suggestions in upstream order
    ///
    /// At most `request.max_suggestions` are returned when it is set.
    async fn identify(
        &self,
        request: &IdentificationRequest,
    ) -> Result<Vec<Suggestion>, PlantIdError>;

    /// Whether the client has credentials to call the service
    fn is_configured(&self) -> bool;
}

/// Plant.id HTTP client implementation
pub struct PlantIdHttpClient {
    client: Client,
    config: PlantIdConfig,
}

impl std::fmt::Debug for PlantIdHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlantIdHttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PlantIdHttpClient {
    /// Create a new Plant.id client with the given configuration
    ///
    /// A missing API key is not an error here; [`PlantIdClient::identify`]
    /// reports it per request without contacting the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PlantIdConfig) -> Result<Self, PlantIdError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlantIdError::RequestSetup(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Full URL of the identification endpoint
    fn identification_url(&self) -> String {
        format!(
            "{}{IDENTIFICATION_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Classify a transport error from `send()`
    fn map_send_error(err: &reqwest::Error) -> PlantIdError {
        if err.is_builder() {
            PlantIdError::RequestSetup(err.to_string())
        } else {
            PlantIdError::NoResponse(err.to_string())
        }
    }

    /// Detail for an error status: the body's `message`, else the reason phrase
    fn error_detail(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string())
    }
}

#[async_trait]
impl PlantIdClient for PlantIdHttpClient {
    #[instrument(skip(self, request), fields(lat = %request.latitude, lon = %request.longitude))]
    async fn identify(
        &self,
        request: &IdentificationRequest,
    ) -> Result<Vec<Suggestion>, PlantIdError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(PlantIdError::MissingApiKey)?;

        let url = self.identification_url();
        debug!(
            url = %url,
            latitude = request.latitude,
            longitude = request.longitude,
            images = ?request.images,
            "Sending request to Plant.id API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlantIdError::NoResponse(e.to_string()))?;

        if !status.is_success() {
            warn!(status = %status, body = %body, "Plant.id API returned an error");
            return Err(PlantIdError::Status {
                status: status.as_u16(),
                message: Self::error_detail(status, &body),
            });
        }

        debug!(status = %status, payload = %body, "Received response from Plant.id API");

        let parsed: IdentificationResponse =
            serde_json::from_str(&body).map_err(|e| PlantIdError::ParseError(e.to_string()))?;

        parsed
            .result
            .classification
            .into_suggestions(request.max_suggestions)
            .map_err(|e| PlantIdError::ParseError(e.to_string()))
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }
}

//! Plant.id v3 wire models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/v3/identification`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificationRequest {
    /// Image URLs or base64 payloads to identify
    pub images: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Ask Plant.id to attach similar images to each suggestion
    pub similar_images: bool,
    /// Only the first `n` suggestions are read from the response; the rest
    /// are dropped unparsed
    #[serde(skip)]
    pub max_suggestions: Option<usize>,
}

impl IdentificationRequest {
    /// Create a request with similar-image matching enabled
    #[must_use]
    pub fn new(images: Vec<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            images,
            latitude,
            longitude,
            similar_images: true,
            max_suggestions: None,
        }
    }

    /// Read at most `limit` suggestions from the response
    #[must_use]
    pub const fn with_max_suggestions(mut self, limit: usize) -> Self {
        self.max_suggestions = Some(limit);
        self
    }
}

/// Top-level identification response
#[derive(Debug, Deserialize)]
pub(crate) struct IdentificationResponse {
    pub result: IdentificationResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdentificationResult {
    pub classification: Classification,
}

/// Suggestions stay raw until the caller decides how many it reads
#[derive(Debug, Deserialize)]
pub(crate) struct Classification {
    pub suggestions: Vec<Value>,
}

impl Classification {
    /// Parse the leading suggestions, up to `limit` when one is given
    pub fn into_suggestions(
        self,
        limit: Option<usize>,
    ) -> Result<Vec<Suggestion>, serde_json::Error> {
        self.suggestions
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(serde_json::from_value)
            .collect()
    }
}

/// A single classification suggestion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// Empty when Plant.id omits it
    #[serde(default)]
    pub name: String,
    pub details: SuggestionDetails,
}

/// Detail block of a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionDetails {
    #[serde(default)]
    pub scientific_name: Option<String>,
    pub taxonomy: Taxonomy,
    #[serde(default)]
    pub image: Option<SuggestionImage>,
}

/// Taxonomic classification of a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub genus: Option<String>,
}

/// Representative image of a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionImage {
    #[serde(default)]
    pub value: Option<String>,
}

impl Suggestion {
    /// URL of the representative image, if Plant.id sent one
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.details.image.as_ref().and_then(|i| i.value.as_deref())
    }
}

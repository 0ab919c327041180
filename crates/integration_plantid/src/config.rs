//! Plant.id client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Plant.id HTTP client
#[derive(Clone, Serialize, Deserialize)]
pub struct PlantIdConfig {
    /// API key sent in the `Api-Key` header
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Base URL of the Plant.id service (default: <https://plant.id>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://plant.id".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for PlantIdConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlantIdConfig {
    /// Whether a non-empty API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for PlantIdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlantIdConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

//! Application configuration

use application::LookupSettings;
use integration_plantid::PlantIdConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Legacy environment variable holding the Plant.id API key
pub const LEGACY_API_KEY_VAR: &str = "PLANT_ID_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Plant.id configuration
    #[serde(default)]
    pub plant_id: PlantIdAppConfig,

    /// Lookup behavior (reference image, coordinate validation)
    #[serde(default)]
    pub lookup: LookupSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Seconds to let in-flight requests finish after a shutdown signal
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_shutdown_timeout() -> u64 {
    30
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            log_format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Socket address string to bind to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Plant.id integration configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PlantIdAppConfig {
    /// Plant.id API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL of the Plant.id service
    #[serde(default = "default_plant_id_base_url")]
    pub base_url: String,

    /// Timeout for identification requests in seconds
    #[serde(default = "default_plant_id_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for PlantIdAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlantIdAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_plant_id_base_url() -> String {
    "https://plant.id".to_string()
}

const fn default_plant_id_timeout() -> u64 {
    30
}

impl Default for PlantIdAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_plant_id_base_url(),
            timeout_secs: default_plant_id_timeout(),
        }
    }
}

impl PlantIdAppConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Convert to the integration client's configuration
    #[must_use]
    pub fn to_client_config(&self) -> PlantIdConfig {
        PlantIdConfig {
            api_key: self.api_key_str().map(str::to_string),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, later ones winning: built-in defaults, an optional
    /// `config.toml`, `GEOPLANT_*` variables (`__` separates nesting, e.g.
    /// `GEOPLANT_PLANT_ID__API_KEY`), and finally `PLANT_ID_API_KEY`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(Self::environment())
    }

    /// `GEOPLANT_*` environment source; `server.allowed_origins` is a
    /// comma-separated list
    fn environment() -> config::Environment {
        config::Environment::with_prefix("GEOPLANT")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
            .try_parsing(true)
    }

    fn load_with(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., GEOPLANT_SERVER__PORT)
            .add_source(environment)
            .set_override_option(
                "plant_id.api_key",
                std::env::var(LEGACY_API_KEY_VAR)
                    .ok()
                    .filter(|key| !key.is_empty()),
            )?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

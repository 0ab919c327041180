//! Plant.id identification integration
//!
//! Client for the Plant.id v3 identification API (<https://plant.id>).
//!
//! # Architecture
//!
//! [`PlantIdClient`] defines the interface used by the infrastructure adapter,
//! implemented by [`PlantIdHttpClient`]. The client only speaks the wire
//! format; trimming and reshaping suggestions happens in the application layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_plantid::{IdentificationRequest, PlantIdClient, PlantIdConfig, PlantIdHttpClient};
//!
//! let config = PlantIdConfig {
//!     api_key: Some("secret".to_string()),
//!     ..Default::default()
//! };
//! let client = PlantIdHttpClient::new(config)?;
//!
//! let request = IdentificationRequest::new(vec![image_url], 45.0, -93.0);
//! let suggestions = client.identify(&request).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{PlantIdClient, PlantIdHttpClient};
pub use config::PlantIdConfig;
pub use error::PlantIdError;
pub use models::{IdentificationRequest, Suggestion, SuggestionDetails, SuggestionImage, Taxonomy};

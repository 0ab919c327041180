//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and provides
//! configuration loading and logging setup for the binaries.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LEGACY_API_KEY_VAR, PlantIdAppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_logging};

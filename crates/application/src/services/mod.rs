//! Application services (use cases)

mod plant_lookup_service;

pub use plant_lookup_service::{DEFAULT_REFERENCE_IMAGE_URL, LookupSettings, PlantLookupService};

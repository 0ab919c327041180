//! Application state shared across handlers

use std::sync::Arc;

use application::PlantLookupService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Plant lookup use case
    pub lookup_service: Arc<PlantLookupService>,
}

impl AppState {
    pub fn new(lookup_service: PlantLookupService) -> Self {
        Self {
            lookup_service: Arc::new(lookup_service),
        }
    }
}

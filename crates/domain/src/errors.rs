//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A coordinate is absent, empty or not a usable number
    #[error("Latitude and longitude are required")]
    MissingCoordinates,
}

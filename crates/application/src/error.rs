//! Application-level errors
//!
//! The `Display` text of each variant is the message returned to HTTP clients.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Required configuration is missing
    #[error("{0}")]
    Configuration(String),

    /// The identification service answered with an error status
    #[error("Plant.id API error: {status} - {detail}")]
    UpstreamStatus {
        /// HTTP status returned upstream
        status: u16,
        /// Upstream message or status reason phrase
        detail: String,
    },

    /// The request was sent but no response came back
    #[error("No response received from Plant.id API")]
    UpstreamUnreachable,

    /// The request could not be built, or its response could not be processed
    #[error("Error setting up request to Plant.id API: {0}")]
    RequestSetup(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error was caused by the caller's input
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

//! Plant.id error types

use thiserror::Error;

/// Errors that can occur while talking to Plant.id
#[derive(Debug, Error)]
pub enum PlantIdError {
    /// No API key was configured, so no request was sent
    #[error("Plant.id API key is not configured")]
    MissingApiKey,

    /// Plant.id answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// `message` from the error body, or the status reason phrase
        message: String,
    },

    /// The request was sent but no response arrived (connect failure, timeout)
    #[error("No response received: {0}")]
    NoResponse(String),

    /// The request could not be built
    #[error("Request setup failed: {0}")]
    RequestSetup(String),

    /// A success response did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl PlantIdError {
    /// HTTP status returned by Plant.id, if the error carries one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

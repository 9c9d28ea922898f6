//! Vision processing errors

use thiserror::Error;

/// Errors that can occur during image analysis
#[derive(Debug, Error)]
pub enum VisionError {
    /// Failed to reach the vision service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request could not be built or sent
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service rejected the request
    ///
    /// Displays the service's own message so it can be surfaced to clients.
    #[error("{message}")]
    Service {
        /// Service error code (e.g. "InvalidImageFormatException")
        code: String,
        /// Human-readable message from the service
        message: String,
    },

    /// Response was missing data or malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Vision request timed out")]
    Timeout,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl VisionError {
    /// Service error code, when the service reported one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}

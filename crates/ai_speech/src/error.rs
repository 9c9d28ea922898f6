//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service rejected the request (unknown voice, quota, etc.)
    ///
    /// Displays the service's own message.
    #[error("{message}")]
    Service {
        /// Service error code (e.g. "InvalidParameterValue")
        code: String,
        /// Human-readable message from the service
        message: String,
    },

    /// Input text cannot be synthesized
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading the audio stream failed part way through
    #[error("Audio stream failed: {0}")]
    StreamFailed(String),

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech synthesis timed out")]
    Timeout,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SpeechError {
    /// Service error code, when the service reported one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}

//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Uploaded file contained no bytes
    #[error("Uploaded image is empty")]
    EmptyImage,

    /// Uploaded file exceeds the size bound
    #[error("Image too large: {size} bytes exceeds maximum of {max} bytes")]
    ImageTooLarge {
        /// Size of the uploaded file
        size: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Uploaded file declared a non-image content type
    #[error("Unsupported content type: {0} (expected an image)")]
    UnsupportedContentType(String),

    /// Invalid voice identifier
    #[error("Invalid voice id: {0}")]
    InvalidVoiceId(String),

    /// Invalid language code
    #[error("Invalid language code: {0}")]
    InvalidLanguageCode(String),
}

impl DomainError {
    /// Check whether this error was caused by an oversized upload
    pub const fn is_too_large(&self) -> bool {
        matches!(self, Self::ImageTooLarge { .. })
    }
}

//! Uploaded image entity

use std::fmt;

use crate::errors::DomainError;

/// Maximum accepted upload size (5 MB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Content types that say nothing about the payload; treated as undeclared
const GENERIC_CONTENT_TYPES: &[&str] = &["application/octet-stream", "binary/octet-stream"];

/// An image received from a client, validated for size and declared type
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedImage {
    bytes: Vec<u8>,
    content_type: Option<String>,
    file_name: Option<String>,
}

impl fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedImage")
            .field("size_bytes", &self.bytes.len())
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .finish()
    }
}

impl UploadedImage {
    /// Validate an upload against the default 5 MB bound
    ///
    /// # Errors
    ///
    /// See [`UploadedImage::with_limit`].
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Result<Self, DomainError> {
        Self::with_limit(bytes, content_type, MAX_IMAGE_BYTES)
    }

    /// Validate an upload against a custom size bound
    ///
    /// # Errors
    ///
    /// - `EmptyImage` when no bytes were sent
    /// - `ImageTooLarge` when the payload exceeds `max_bytes`
    /// - `UnsupportedContentType` when a specific non-image type was declared
    pub fn with_limit(
        bytes: Vec<u8>,
        content_type: Option<String>,
        max_bytes: usize,
    ) -> Result<Self, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::EmptyImage);
        }

        if bytes.len() > max_bytes {
            return Err(DomainError::ImageTooLarge {
                size: bytes.len(),
                max: max_bytes,
            });
        }

        let content_type = content_type
            .map(|ct| ct.trim().to_string())
            .filter(|ct| !ct.is_empty());

        if let Some(ref ct) = content_type {
            let base = ct.split(';').next().unwrap_or(ct).trim().to_lowercase();
            let generic = GENERIC_CONTENT_TYPES.contains(&base.as_str());
            if !generic && !base.starts_with("image/") {
                return Err(DomainError::UnsupportedContentType(ct.clone()));
            }
        }

        Ok(Self {
            bytes,
            content_type,
            file_name: None,
        })
    }

    /// Attach the client-side file name
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Raw image bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the raw image bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Size of the image in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Declared content type, if any
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Client-side file name, if any
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

//! Application state shared across handlers

use std::sync::Arc;

use application::ImageNarrationService;
use domain::MAX_IMAGE_BYTES;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Narration pipeline
    pub narration_service: Arc<ImageNarrationService>,
    /// Largest accepted image in bytes
    pub max_image_bytes: usize,
}

impl AppState {
    /// Create state with the default image limit
    pub fn new(narration_service: Arc<ImageNarrationService>) -> Self {
        Self {
            narration_service,
            max_image_bytes: MAX_IMAGE_BYTES,
        }
    }

    /// Override the image limit
    #[must_use]
    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }
}

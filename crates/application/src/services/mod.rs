//! Application services - Use case implementations

mod description_composer;
mod image_narration_service;
mod translation_service;

pub use description_composer::{MAX_DESCRIBED_LABELS, compose_description};
pub use image_narration_service::{ImageNarrationService, NarrationResult};
pub use translation_service::TranslationService;

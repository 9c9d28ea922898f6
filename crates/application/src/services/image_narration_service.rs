//! Image narration service - Handles the image-to-speech workflow
//!
//! This service orchestrates the complete narration flow:
//! 1. Analyze the image (labels and primary face)
//! 2. Compose an English description
//! 3. Translate the description (falls back to English)
//! 4. Synthesize speech from the translated text
//!
//! Every step is awaited in order. The first failing step ends the request.

use std::{fmt, sync::Arc, time::Instant};

use domain::{AudioPayload, NarrationStage, UploadedImage, VoiceId};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{SpeechSynthesisPort, TranslationPort, VisionPort},
    services::{TranslationService, compose_description},
};

/// Result of narrating an image
#[derive(Debug, Clone)]
pub struct NarrationResult {
    /// Description as spoken (translated, or English on fallback)
    pub description: String,
    /// Description before translation
    pub english_description: String,
    /// Synthesized speech
    pub audio: AudioPayload,
    /// Final stage reached
    pub stage: NarrationStage,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Service for turning an uploaded image into narrated audio
pub struct ImageNarrationService {
    vision_port: Arc<dyn VisionPort>,
    translation: TranslationService,
    speech_port: Arc<dyn SpeechSynthesisPort>,
}

impl fmt::Debug for ImageNarrationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageNarrationService")
            .field("translation", &self.translation)
            .finish_non_exhaustive()
    }
}

impl ImageNarrationService {
    /// Create a new image narration service
    pub fn new(
        vision_port: Arc<dyn VisionPort>,
        translation_port: Arc<dyn TranslationPort>,
        speech_port: Arc<dyn SpeechSynthesisPort>,
    ) -> Self {
        Self {
            vision_port,
            translation: TranslationService::new(translation_port),
            speech_port,
        }
    }

    /// Narrate an image end-to-end
    ///
    /// `voice` falls back to the speech adapter's default when `None`.
    #[instrument(skip(self, image, voice), fields(
        image_size = image.size_bytes(),
        voice = voice.as_ref().map_or("default", VoiceId::as_str)
    ))]
    pub async fn narrate(
        &self,
        image: &UploadedImage,
        voice: Option<VoiceId>,
    ) -> Result<NarrationResult, ApplicationError> {
        let start = Instant::now();
        let mut stage = NarrationStage::Received;

        info!("Analyzing image");
        let vision = match self.vision_port.analyze(image).await {
            Ok(result) => result,
            Err(e) => return Err(Self::fail(stage, e)),
        };
        advance(&mut stage);

        let english_description = compose_description(&vision);
        debug!(
            label_count = vision.labels().len(),
            face_found = vision.face().is_some(),
            description = %english_description,
            "Description composed"
        );
        advance(&mut stage);

        let description = self.translation.translate(&english_description).await;
        info!(description = %description, "Description ready");
        advance(&mut stage);

        info!("Synthesizing audio");
        let audio = match self.speech_port.synthesize(&description, voice).await {
            Ok(audio) => audio,
            Err(e) => return Err(Self::fail(stage, e)),
        };
        advance(&mut stage);

        #[allow(clippy::cast_possible_truncation)]
        let processing_time_ms = start.elapsed().as_millis() as u64;
        advance(&mut stage);

        info!(
            processing_time_ms = processing_time_ms,
            audio_size = audio.size_bytes(),
            "Narration complete"
        );

        Ok(NarrationResult {
            description,
            english_description,
            audio,
            stage,
            processing_time_ms,
        })
    }

    fn fail(stage: NarrationStage, error: ApplicationError) -> ApplicationError {
        warn!(
            stage = %stage,
            next = %NarrationStage::Failed,
            error = %error,
            "Narration failed"
        );
        error
    }
}

fn advance(stage: &mut NarrationStage) {
    if let Some(next) = stage.next() {
        debug!(from = %stage, to = %next, "Narration stage advanced");
        *stage = next;
    }
}

//! Speech adapter - Implements SpeechSynthesisPort using ai_speech crate

use std::sync::Arc;

use ai_speech::{PollySpeechProvider, SpeechConfig, SpeechError, TextToSpeech};
use application::error::ApplicationError;
use application::ports::SpeechSynthesisPort;
use async_trait::async_trait;
use aws_config::SdkConfig;
use domain::{AudioPayload, VoiceId};
use tracing::{debug, instrument};

/// Adapter for speech synthesis using ai_speech crate
pub struct SpeechAdapter {
    synthesizer: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("provider", &self.synthesizer.provider_name())
            .field("default_voice", &self.synthesizer.default_voice())
            .finish()
    }
}

impl SpeechAdapter {
    /// Create an adapter around any speech synthesizer
    pub fn new(synthesizer: Arc<dyn TextToSpeech>) -> Self {
        Self { synthesizer }
    }

    /// Create an adapter backed by AWS Polly
    pub fn polly(sdk_config: &SdkConfig, config: SpeechConfig) -> Self {
        Self::new(Arc::new(PollySpeechProvider::new(sdk_config, config)))
    }

    /// Voice used when a request names none
    pub fn default_voice(&self) -> &VoiceId {
        self.synthesizer.default_voice()
    }

    /// Map speech error to application error
    ///
    /// The text to speak is produced by the pipeline, so a rejected input
    /// is a processing failure rather than a client error.
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::InvalidInput(e) => ApplicationError::ExternalService(e),
            SpeechError::Service { message, .. } => ApplicationError::ExternalService(message),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesisPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(
        provider = self.synthesizer.provider_name(),
        text_len = text.len()
    ))]
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<VoiceId>,
    ) -> Result<AudioPayload, ApplicationError> {
        let audio = self
            .synthesizer
            .synthesize(text, voice.as_ref())
            .await
            .map_err(Self::map_error)?;

        debug!(
            audio_size = audio.size_bytes(),
            format = %audio.format(),
            "Synthesis complete"
        );

        Ok(audio)
    }
}

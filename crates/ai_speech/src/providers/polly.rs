//! AWS Polly speech provider
//!
//! Implements `TextToSpeech` using the Polly `SynthesizeSpeech` operation.
//! The audio stream is drained into a single buffer before returning.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::Client;
use aws_sdk_polly::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_polly::types::{
    Engine, LanguageCode as PollyLanguageCode, OutputFormat, VoiceId as PollyVoiceId,
};
use domain::{AudioFormat, AudioPayload, VoiceId};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;

/// Polly-backed speech synthesizer
#[derive(Debug, Clone)]
pub struct PollySpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl PollySpeechProvider {
    /// Create a provider from a loaded AWS SDK configuration
    pub fn new(sdk_config: &SdkConfig, config: SpeechConfig) -> Self {
        Self::from_client(Client::new(sdk_config), config)
    }

    /// Create a provider around an existing Polly client
    pub const fn from_client(client: Client, config: SpeechConfig) -> Self {
        Self { client, config }
    }

    /// Get the active configuration
    pub const fn config(&self) -> &SpeechConfig {
        &self.config
    }

    const fn output_format(format: AudioFormat) -> OutputFormat {
        match format {
            AudioFormat::Mp3 => OutputFormat::Mp3,
            AudioFormat::OggVorbis => OutputFormat::OggVorbis,
        }
    }
}

/// Map an SDK error, keeping the service's own message where there is one
fn map_sdk_error<E, R>(err: SdkError<E, R>) -> SpeechError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let is_service = matches!(err, SdkError::ServiceError(_));
    let is_timeout = matches!(err, SdkError::TimeoutError(_));
    let is_dispatch = matches!(err, SdkError::DispatchFailure(_));
    let is_response = matches!(err, SdkError::ResponseError(_));
    let code = err.code().map(ToString::to_string);
    let message = err.message().map(ToString::to_string);

    if is_service {
        let code = code.unwrap_or_else(|| "Unknown".to_string());
        let message = message.unwrap_or_else(|| DisplayErrorContext(err).to_string());
        return SpeechError::Service { code, message };
    }

    if is_timeout {
        SpeechError::Timeout
    } else if is_dispatch {
        SpeechError::ConnectionFailed(DisplayErrorContext(err).to_string())
    } else if is_response {
        SpeechError::InvalidResponse(DisplayErrorContext(err).to_string())
    } else {
        SpeechError::RequestFailed(DisplayErrorContext(err).to_string())
    }
}

#[async_trait]
impl TextToSpeech for PollySpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice))]
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&VoiceId>,
    ) -> Result<AudioPayload, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::InvalidInput(
                "Text to synthesize is empty".to_string(),
            ));
        }

        let voice = voice.unwrap_or(&self.config.default_voice);
        tracing::Span::current().record("voice", voice.as_str());
        if !self.config.engine.supports_voice(voice.as_str()) {
            warn!(
                engine = self.config.engine.as_str(),
                "Voice is not offered by the configured engine"
            );
        }

        let output = self
            .client
            .synthesize_speech()
            .text(text)
            .voice_id(PollyVoiceId::from(voice.as_str()))
            .language_code(PollyLanguageCode::from(self.config.language_code.as_str()))
            .engine(Engine::from(self.config.engine.as_str()))
            .output_format(Self::output_format(self.config.output_format))
            .send()
            .await
            .map_err(map_sdk_error)?;

        let data = output
            .audio_stream
            .collect()
            .await
            .map_err(|e| SpeechError::StreamFailed(e.to_string()))?
            .into_bytes();

        if data.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Speech service returned no audio".to_string(),
            ));
        }

        debug!(audio_size = data.len(), "Speech synthesized");
        Ok(AudioPayload::new(data.to_vec(), self.config.output_format))
    }

    fn default_voice(&self) -> &VoiceId {
        &self.config.default_voice
    }

    fn provider_name(&self) -> &'static str {
        "polly"
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_polly::config::{BehaviorVersion, Region};

    use super::*;

    fn test_provider() -> PollySpeechProvider {
        let config = aws_sdk_polly::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        PollySpeechProvider::from_client(Client::from_conf(config), SpeechConfig::default())
    }

    #[test]
    fn output_format_mapping() {
        assert_eq!(
            PollySpeechProvider::output_format(AudioFormat::Mp3),
            OutputFormat::Mp3
        );
        assert_eq!(
            PollySpeechProvider::output_format(AudioFormat::OggVorbis),
            OutputFormat::OggVorbis
        );
    }

    #[test]
    fn default_voice_comes_from_config() {
        let provider = test_provider();
        assert_eq!(provider.default_voice().as_str(), "Camila");
        assert_eq!(provider.provider_name(), "polly");
    }

    #[tokio::test]
    async fn empty_text_is_rejected_without_calling_service() {
        let provider = test_provider();
        let result = provider.synthesize("   ", None).await;
        assert!(matches!(result, Err(SpeechError::InvalidInput(_))));
    }

    #[test]
    fn language_code_maps_to_polly_variant() {
        let provider = test_provider();
        let code = PollyLanguageCode::from(provider.config().language_code.as_str());
        assert_eq!(code, PollyLanguageCode::PtBr);
    }
}

//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that speech synthesis adapters must implement.

use async_trait::async_trait;
use domain::{AudioPayload, VoiceId};

use crate::error::SpeechError;

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to audio speech.
///
/// # Example
///
/// ```ignore
/// use ai_speech::TextToSpeech;
///
/// async fn narrate(tts: &impl TextToSpeech, text: &str) -> Result<String, SpeechError> {
///     let audio = tts.synthesize(text, None).await?;
///     Ok(audio.to_data_uri())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `voice` - Voice to use (uses the default if `None`)
    ///
    /// # Returns
    ///
    /// Returns the complete audio; never a partial buffer.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&VoiceId>,
    ) -> Result<AudioPayload, SpeechError>;

    /// Get the default voice
    fn default_voice(&self) -> &VoiceId;

    /// Name of the backing provider, for logs
    fn provider_name(&self) -> &'static str;
}

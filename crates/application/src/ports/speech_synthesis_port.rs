//! Speech synthesis port - Interface for text-to-speech

use async_trait::async_trait;
use domain::{AudioPayload, VoiceId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech synthesis operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// Synthesize speech from text
    ///
    /// # Arguments
    /// * `text` - Text to synthesize
    /// * `voice` - Voice to use; the adapter's default when `None`
    ///
    /// # Returns
    /// The complete audio buffer
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<VoiceId>,
    ) -> Result<AudioPayload, ApplicationError>;
}

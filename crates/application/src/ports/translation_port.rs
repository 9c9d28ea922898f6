//! Translation port - Interface for machine translation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for translating narration text into the spoken language
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translate text into the configured target language
    async fn translate(&self, text: &str) -> Result<String, ApplicationError>;
}

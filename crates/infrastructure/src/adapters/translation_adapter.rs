//! Translation adapter - Implements TranslationPort using integration_translate

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::TranslationPort;
use async_trait::async_trait;
use integration_translate::{
    GoogleTranslateClient, TranslateConfig, TranslateError, TranslationClient,
};
use tracing::{debug, instrument};

/// Adapter for translation services
pub struct TranslationAdapter {
    client: Arc<dyn TranslationClient>,
}

impl std::fmt::Debug for TranslationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationAdapter")
            .field("target_language", &self.client.target_language())
            .finish()
    }
}

impl TranslationAdapter {
    /// Create an adapter around any translation client
    pub fn new(client: Arc<dyn TranslationClient>) -> Self {
        Self { client }
    }

    /// Create an adapter backed by Google Translate
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn google(config: TranslateConfig) -> Result<Self, ApplicationError> {
        let client = GoogleTranslateClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map translation error to application error
    fn map_error(err: TranslateError) -> ApplicationError {
        ApplicationError::ExternalService(err.to_string())
    }
}

#[async_trait]
impl TranslationPort for TranslationAdapter {
    #[instrument(skip(self, text), fields(
        target = self.client.target_language(),
        text_len = text.len()
    ))]
    async fn translate(&self, text: &str) -> Result<String, ApplicationError> {
        let translated = self.client.translate(text).await.map_err(Self::map_error)?;
        debug!(translated_len = translated.len(), "Translation received");
        Ok(translated)
    }
}

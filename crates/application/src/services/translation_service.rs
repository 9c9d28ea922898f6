//! Translation service - translation that never fails the pipeline

use std::{fmt, sync::Arc};

use tracing::{debug, instrument, warn};

use crate::ports::TranslationPort;

/// Wraps a [`TranslationPort`] and falls back to the input text on error
pub struct TranslationService {
    port: Arc<dyn TranslationPort>,
}

impl fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationService").finish_non_exhaustive()
    }
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(port: Arc<dyn TranslationPort>) -> Self {
        Self { port }
    }

    /// Translate `text`, returning it unchanged if translation fails
    ///
    /// Input is forwarded as-is, including empty and degenerate strings.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn translate(&self, text: &str) -> String {
        match self.port.translate(text).await {
            Ok(translated) => {
                debug!(translated_len = translated.len(), "Translation succeeded");
                translated
            },
            Err(e) => {
                warn!(error = %e, "Translation failed, using original text");
                text.to_string()
            },
        }
    }
}

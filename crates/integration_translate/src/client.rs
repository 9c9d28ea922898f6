//! Google Translate client
//!
//! HTTP client for the Google Translate web endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::response::{detected_language, join_segments};

/// Translation client errors
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Connection to the translation service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the translation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from translation service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service answered without any translated text
    #[error("Translation response contained no text")]
    EmptyTranslation,
}

/// Translation service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Service base URL (default: <https://translate.googleapis.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Source language (default: "en")
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language (default: "pt")
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "pt".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Translation client trait
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Translate text from the configured source to the target language
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;

    /// Target language code
    fn target_language(&self) -> &str;
}

/// Google Translate HTTP client implementation
#[derive(Debug)]
pub struct GoogleTranslateClient {
    client: Client,
    config: TranslateConfig,
}

impl GoogleTranslateClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TranslateConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, TranslateError> {
        Self::new(TranslateConfig::default())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/translate_a/single",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TranslationClient for GoogleTranslateClient {
    #[instrument(
        skip(self, text),
        fields(
            text_len = text.len(),
            sl = %self.config.source_language,
            tl = %self.config.target_language
        )
    )]
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let url = self.endpoint();
        debug!(url = %url, "Requesting translation");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.config.source_language.as_str()),
                ("tl", self.config.target_language.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    TranslateError::ConnectionFailed(e.to_string())
                } else {
                    TranslateError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(TranslateError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(TranslateError::RequestFailed(format!("HTTP {status}")));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::ParseError(e.to_string()))?;

        let translated = join_segments(&payload).ok_or(TranslateError::EmptyTranslation)?;

        debug!(
            translated_len = translated.len(),
            detected = detected_language(&payload).unwrap_or("unknown"),
            "Translation received"
        );

        Ok(translated)
    }

    fn target_language(&self) -> &str {
        &self.config.target_language
    }
}

//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `aws`: AWS credentials, region and endpoint override
//!
//! Provider settings (`vision`, `speech`, `translation`) reuse the config
//! types of their crates.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `config.toml` in the working directory (optional)
//! 3. `NARRATOR_*` environment variables, `__` between sections
//!    (e.g. `NARRATOR_SERVER__PORT=8080`)
//! 4. `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_REGION`, `PORT`

mod aws;
mod server;

use ai_speech::SpeechConfig;
use ai_vision::VisionConfig;
use integration_translate::TranslateConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use aws::AwsConfig;
pub use server::ServerConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix for application-specific environment variables
const ENV_PREFIX: &str = "NARRATOR";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// AWS key pair is absent
    #[error(
        "AWS credentials are not configured (set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY)"
    )]
    MissingCredentials,

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// AWS account configuration
    #[serde(default)]
    pub aws: AwsConfig,

    /// Image analysis configuration
    #[serde(default)]
    pub vision: VisionConfig,

    /// Speech synthesis configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Translation configuration
    #[serde(default)]
    pub translation: TranslateConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from file and the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading environment variables from `vars`
    /// instead of the process environment when given
    fn load_from(vars: Option<config::Map<String, String>>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| match &vars {
            Some(map) => map.get(key).cloned(),
            None => std::env::var(key).ok(),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("aws.region", "us-east-1")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with prefixed variables (e.g., NARRATOR_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars.clone()),
            )
            // Conventional AWS and hosting variables
            .set_override_option("aws.access_key_id", lookup("AWS_ACCESS_KEY_ID"))?
            .set_override_option("aws.secret_access_key", lookup("AWS_SECRET_ACCESS_KEY"))?
            .set_override_option("aws.region", lookup("AWS_REGION"))?
            .set_override_option("server.port", lookup("PORT"))?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Check that the configuration can serve requests
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredentials` when the AWS key pair is
    /// absent, or `ConfigError::Invalid` for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.aws.has_credentials() {
            return Err(ConfigError::MissingCredentials);
        }

        if self.aws.region.trim().is_empty() {
            return Err(ConfigError::Invalid("aws.region must not be empty".to_string()));
        }

        if self.server.max_image_bytes == 0 {
            return Err(ConfigError::Invalid(
                "server.max_image_bytes must be greater than 0".to_string(),
            ));
        }

        self.vision.validate().map_err(ConfigError::Invalid)
    }
}

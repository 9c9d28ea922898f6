//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains adapters for AWS Rekognition, AWS Polly and Google Translate,
//! plus configuration loading, AWS SDK setup and telemetry.

pub mod adapters;
pub mod aws;
pub mod config;
pub mod telemetry;

pub use adapters::{SpeechAdapter, TranslationAdapter, VisionAdapter};
pub use aws::load_sdk_config;
pub use config::{AppConfig, AwsConfig, ConfigError, ServerConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};

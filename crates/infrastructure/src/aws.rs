//! AWS SDK configuration shared by the Rekognition and Polly clients

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_rekognition::config::Credentials;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::{AwsConfig, ConfigError};

/// Credentials provider name recorded by the SDK
const PROVIDER_NAME: &str = "narrator-config";

/// Build the SDK configuration from static credentials
///
/// Retries are disabled: every service call is attempted exactly once.
///
/// # Errors
///
/// Returns `ConfigError::MissingCredentials` if either key is absent.
#[instrument(skip(config), fields(region = %config.region))]
pub async fn load_sdk_config(config: &AwsConfig) -> Result<SdkConfig, ConfigError> {
    let (Some(access_key), Some(secret_key)) = (&config.access_key_id, &config.secret_access_key)
    else {
        return Err(ConfigError::MissingCredentials);
    };

    let credentials = Credentials::new(
        access_key.expose_secret(),
        secret_key.expose_secret(),
        None,
        None,
        PROVIDER_NAME,
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials)
        .retry_config(RetryConfig::disabled());

    if let Some(endpoint) = &config.endpoint_url {
        debug!(endpoint = %endpoint, "Using AWS endpoint override");
        loader = loader.endpoint_url(endpoint);
    }

    Ok(loader.load().await)
}

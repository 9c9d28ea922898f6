//! AWS account configuration shared by Rekognition and Polly.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Number of access key characters that may appear in logs
const VISIBLE_KEY_PREFIX: usize = 10;

/// AWS credentials, region and optional endpoint override
#[derive(Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Access key ID (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub access_key_id: Option<SecretString>,

    /// Secret access key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub secret_access_key: Option<SecretString>,

    /// Region for both services (default: us-east-1)
    #[serde(default = "default_region")]
    pub region: String,

    /// Endpoint override, e.g. a LocalStack URL
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl std::fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsConfig")
            .field("access_key_id", &self.masked_access_key())
            .field(
                "secret_access_key",
                &if self.secret_access_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            access_key_id: None,
            secret_access_key: None,
            region: default_region(),
            endpoint_url: None,
        }
    }
}

impl AwsConfig {
    /// Whether both halves of the key pair are present and non-blank
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        let present = |s: &Option<SecretString>| {
            s.as_ref()
                .is_some_and(|v| !v.expose_secret().trim().is_empty())
        };
        present(&self.access_key_id) && present(&self.secret_access_key)
    }

    /// Access key reduced to a short prefix for startup logs
    ///
    /// Returns `None` when no access key is configured.
    #[must_use]
    pub fn masked_access_key(&self) -> Option<String> {
        self.access_key_id.as_ref().map(|key| {
            let prefix: String = key.expose_secret().chars().take(VISIBLE_KEY_PREFIX).collect();
            format!("{prefix}...")
        })
    }
}

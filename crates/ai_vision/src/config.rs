//! Configuration for image analysis

use serde::{Deserialize, Serialize};

/// Configuration for the vision provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Maximum number of labels requested from the service
    #[serde(default = "default_max_labels")]
    pub max_labels: u16,

    /// Minimum label confidence in percent
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
}

const fn default_max_labels() -> u16 {
    10
}

const fn default_min_confidence() -> f32 {
    70.0
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            max_labels: default_max_labels(),
            min_confidence: default_min_confidence(),
        }
    }
}

impl VisionConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_labels == 0 {
            return Err("max_labels must be greater than 0".to_string());
        }

        if !(0.0..=100.0).contains(&self.min_confidence) {
            return Err(format!(
                "min_confidence must be between 0 and 100, got {}",
                self.min_confidence
            ));
        }

        Ok(())
    }
}

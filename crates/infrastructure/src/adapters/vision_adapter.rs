//! Vision adapter - Implements VisionPort using ai_vision crate

use std::sync::Arc;

use ai_vision::{ImageAnalyzer, RekognitionVisionProvider, VisionConfig, VisionError};
use application::error::ApplicationError;
use application::ports::VisionPort;
use async_trait::async_trait;
use aws_config::SdkConfig;
use domain::{UploadedImage, VisionResult};
use tracing::{debug, instrument, warn};

/// Adapter for image analysis using ai_vision crate
///
/// Label detection failures fail the request. Face detection failures are
/// logged and reported as "no face".
pub struct VisionAdapter {
    analyzer: Arc<dyn ImageAnalyzer>,
}

impl std::fmt::Debug for VisionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionAdapter")
            .field("provider", &self.analyzer.provider_name())
            .finish()
    }
}

impl VisionAdapter {
    /// Create an adapter around any image analyzer
    pub fn new(analyzer: Arc<dyn ImageAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Create an adapter backed by AWS Rekognition
    ///
    /// # Errors
    ///
    /// Returns an error if the vision configuration is invalid.
    pub fn rekognition(
        sdk_config: &SdkConfig,
        config: VisionConfig,
    ) -> Result<Self, ApplicationError> {
        let provider =
            RekognitionVisionProvider::new(sdk_config, config).map_err(Self::map_error)?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Map vision error to application error
    fn map_error(err: VisionError) -> ApplicationError {
        match err {
            VisionError::Configuration(e) => ApplicationError::Configuration(e),
            VisionError::Service { message, .. } => ApplicationError::ExternalService(message),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl VisionPort for VisionAdapter {
    #[instrument(skip(self, image), fields(
        provider = self.analyzer.provider_name(),
        image_size = image.size_bytes()
    ))]
    async fn analyze(&self, image: &UploadedImage) -> Result<VisionResult, ApplicationError> {
        let labels = self
            .analyzer
            .detect_labels(image.bytes())
            .await
            .map_err(Self::map_error)?;

        let face = match self.analyzer.detect_faces(image.bytes()).await {
            Ok(face) => face,
            Err(e) => {
                warn!(
                    error = %e,
                    code = e.code().unwrap_or("none"),
                    "Face detection failed, continuing without face"
                );
                None
            },
        };

        debug!(
            label_count = labels.len(),
            face_found = face.is_some(),
            "Image analysis complete"
        );

        Ok(VisionResult::new(labels, face))
    }
}

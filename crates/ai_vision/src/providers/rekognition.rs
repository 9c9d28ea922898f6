//! AWS Rekognition vision provider
//!
//! Implements `ImageAnalyzer` using the Rekognition `DetectLabels` and
//! `DetectFaces` operations. Images are sent inline as bytes; nothing is
//! stored in S3.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rekognition::Client;
use aws_sdk_rekognition::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{self as rk, Attribute, Image};
use domain::{AgeRange, Emotion, FaceDetails, Gender, Label};
use tracing::{debug, instrument};

use crate::config::VisionConfig;
use crate::error::VisionError;
use crate::ports::ImageAnalyzer;

/// Rekognition-backed image analyzer
#[derive(Debug, Clone)]
pub struct RekognitionVisionProvider {
    client: Client,
    config: VisionConfig,
}

impl RekognitionVisionProvider {
    /// Create a provider from a loaded AWS SDK configuration
    ///
    /// # Errors
    ///
    /// Returns `VisionError::Configuration` if the configuration is invalid.
    pub fn new(sdk_config: &SdkConfig, config: VisionConfig) -> Result<Self, VisionError> {
        Self::from_client(Client::new(sdk_config), config)
    }

    /// Create a provider around an existing Rekognition client
    ///
    /// # Errors
    ///
    /// Returns `VisionError::Configuration` if the configuration is invalid.
    pub fn from_client(client: Client, config: VisionConfig) -> Result<Self, VisionError> {
        config.validate().map_err(VisionError::Configuration)?;
        Ok(Self { client, config })
    }

    /// Get the active configuration
    pub const fn config(&self) -> &VisionConfig {
        &self.config
    }

    fn image(bytes: &[u8]) -> Image {
        Image::builder().bytes(Blob::new(bytes.to_vec())).build()
    }

    /// Keep named labels above the threshold, ranked and truncated
    fn collect_labels(&self, raw: &[rk::Label]) -> Vec<Label> {
        let mut labels: Vec<Label> = raw
            .iter()
            .filter_map(|label| {
                let name = label.name()?;
                let confidence = label.confidence().unwrap_or_default();
                (confidence >= self.config.min_confidence).then(|| Label::new(name, confidence))
            })
            .collect();

        labels.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        labels.truncate(usize::from(self.config.max_labels));
        labels
    }

    fn face_from_detail(detail: &rk::FaceDetail) -> FaceDetails {
        let gender = Gender::from_service_value(
            detail
                .gender()
                .and_then(rk::Gender::value)
                .map(rk::GenderType::as_str),
        );

        let age_range = detail.age_range().and_then(|range| {
            let low = u32::try_from(range.low()?).ok()?;
            let high = u32::try_from(range.high()?).ok()?;
            Some(AgeRange::new(low, high))
        });

        let emotions = detail
            .emotions()
            .iter()
            .filter_map(|emotion| {
                let kind = emotion.r#type()?.as_str();
                Some(Emotion::new(kind, emotion.confidence().unwrap_or_default()))
            })
            .collect();

        FaceDetails::new(gender, age_range, emotions)
    }
}

/// Map an SDK error, keeping the service's own message where there is one
fn map_sdk_error<E, R>(err: SdkError<E, R>) -> VisionError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let is_service = matches!(err, SdkError::ServiceError(_));
    let is_timeout = matches!(err, SdkError::TimeoutError(_));
    let is_dispatch = matches!(err, SdkError::DispatchFailure(_));
    let is_response = matches!(err, SdkError::ResponseError(_));
    let code = err.code().map(ToString::to_string);
    let message = err.message().map(ToString::to_string);

    if is_service {
        let code = code.unwrap_or_else(|| "Unknown".to_string());
        let message = message.unwrap_or_else(|| DisplayErrorContext(err).to_string());
        return VisionError::Service { code, message };
    }

    if is_timeout {
        VisionError::Timeout
    } else if is_dispatch {
        VisionError::ConnectionFailed(DisplayErrorContext(err).to_string())
    } else if is_response {
        VisionError::InvalidResponse(DisplayErrorContext(err).to_string())
    } else {
        VisionError::RequestFailed(DisplayErrorContext(err).to_string())
    }
}

#[async_trait]
impl ImageAnalyzer for RekognitionVisionProvider {
    #[instrument(skip(self, image), fields(image_size = image.len()))]
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<Label>, VisionError> {
        let output = self
            .client
            .detect_labels()
            .image(Self::image(image))
            .max_labels(i32::from(self.config.max_labels))
            .min_confidence(self.config.min_confidence)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let labels = self.collect_labels(output.labels());
        debug!(label_count = labels.len(), "Labels detected");
        Ok(labels)
    }

    #[instrument(skip(self, image), fields(image_size = image.len()))]
    async fn detect_faces(&self, image: &[u8]) -> Result<Option<FaceDetails>, VisionError> {
        let output = self
            .client
            .detect_faces()
            .image(Self::image(image))
            .attributes(Attribute::All)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let faces = output.face_details();
        debug!(face_count = faces.len(), "Faces detected");
        Ok(faces.first().map(Self::face_from_detail))
    }

    fn provider_name(&self) -> &'static str {
        "rekognition"
    }
}

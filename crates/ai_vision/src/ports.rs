//! Port definitions for image analysis

use async_trait::async_trait;
use domain::{FaceDetails, Label};

use crate::error::VisionError;

/// Port for image analysis implementations
///
/// Label and face detection are separate calls so callers can decide how
/// to treat a failure of either one.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// Detect objects and scenes in an image
    ///
    /// Returns labels ranked by confidence, highest first, already limited
    /// to the configured count and threshold.
    ///
    /// # Errors
    ///
    /// Returns `VisionError` if the service call fails.
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<Label>, VisionError>;

    /// Detect the primary face in an image
    ///
    /// Returns `None` when no face was found.
    ///
    /// # Errors
    ///
    /// Returns `VisionError` if the service call fails.
    async fn detect_faces(&self, image: &[u8]) -> Result<Option<FaceDetails>, VisionError>;

    /// Name of the backing provider, for logs
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use domain::Gender;

    use super::*;

    struct FixedAnalyzer {
        labels: Vec<Label>,
        face: Option<FaceDetails>,
    }

    #[async_trait]
    impl ImageAnalyzer for FixedAnalyzer {
        async fn detect_labels(&self, _image: &[u8]) -> Result<Vec<Label>, VisionError> {
            Ok(self.labels.clone())
        }

        async fn detect_faces(&self, _image: &[u8]) -> Result<Option<FaceDetails>, VisionError> {
            Ok(self.face.clone())
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn analyzer_returns_labels_and_face() {
        let analyzer = FixedAnalyzer {
            labels: vec![Label::new("Dog", 99.0)],
            face: Some(FaceDetails::new(Gender::Male, None, Vec::new())),
        };

        let labels = analyzer.detect_labels(&[1, 2, 3]).await.unwrap();
        let face = analyzer.detect_faces(&[1, 2, 3]).await.unwrap();

        assert_eq!(labels.len(), 1);
        assert_eq!(face.map(|f| f.gender()), Some(Gender::Male));
        assert_eq!(analyzer.provider_name(), "fixed");
    }

    #[test]
    fn analyzer_is_object_safe() {
        let analyzer: Box<dyn ImageAnalyzer> = Box::new(FixedAnalyzer {
            labels: Vec::new(),
            face: None,
        });
        assert_eq!(analyzer.provider_name(), "fixed");
    }
}

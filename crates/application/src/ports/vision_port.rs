//! Vision port - Interface for image analysis

use async_trait::async_trait;
use domain::{UploadedImage, VisionResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for image analysis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VisionPort: Send + Sync {
    /// Detect labels and the primary face in an image
    ///
    /// A failed face lookup is reported as "no face"; only a failed label
    /// lookup is an error.
    async fn analyze(&self, image: &UploadedImage) -> Result<VisionResult, ApplicationError>;
}

//! Domain entities - Request-scoped objects produced and consumed by the pipeline

mod audio_payload;
mod narration;
mod uploaded_image;
mod vision;

pub use audio_payload::{AudioFormat, AudioPayload};
pub use narration::NarrationStage;
pub use uploaded_image::{MAX_IMAGE_BYTES, UploadedImage};
pub use vision::{AgeRange, Emotion, FaceDetails, Gender, Label, VisionResult};

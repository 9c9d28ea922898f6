//! Image processing handler
//!
//! Accepts a multipart form with an `image` file and an optional `voiceId`
//! text field, runs the narration pipeline, and returns the description
//! together with the audio as a data URI.

use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{Field, MultipartRejection},
    },
};
use domain::{DomainError, UploadedImage, VoiceId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{error::ApiError, state::AppState};

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the voice selection
pub const VOICE_FIELD: &str = "voiceId";

/// Successful processing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessImageResponse {
    /// Always `true`
    pub success: bool,
    /// Spoken description (translated, or English on fallback)
    pub description: String,
    /// Audio as `data:audio/mpeg;base64,...`
    pub audio: String,
}

/// Image file read from the form
#[derive(Debug)]
struct ImageUpload {
    bytes: Vec<u8>,
    content_type: Option<String>,
    file_name: Option<String>,
}

/// Fields of interest from the multipart form
#[derive(Debug, Default)]
struct NarrationForm {
    image: Option<ImageUpload>,
    voice_id: Option<String>,
}

/// Narrate an uploaded image
#[instrument(skip(state, multipart))]
pub async fn process_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessImageResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let form = read_form(&mut multipart, state.max_image_bytes).await?;

    let Some(upload) = form.image else {
        return Err(ApiError::BadRequest("No image uploaded".to_string()));
    };

    let mut image =
        UploadedImage::with_limit(upload.bytes, upload.content_type, state.max_image_bytes)?;
    if let Some(file_name) = upload.file_name {
        image = image.with_file_name(file_name);
    }

    let voice = VoiceId::parse_optional(form.voice_id.as_deref());

    info!(
        image_size = image.size_bytes(),
        content_type = image.content_type().unwrap_or("unknown"),
        voice = voice.as_ref().map_or("default", VoiceId::as_str),
        "📸 Processing image"
    );

    let result = state.narration_service.narrate(&image, voice).await?;

    info!(
        processing_time_ms = result.processing_time_ms,
        "✅ Image processed"
    );

    Ok(Json(ProcessImageResponse {
        success: true,
        description: result.description,
        audio: result.audio.to_data_uri(),
    }))
}

/// Collect the image and voice fields, ignoring any others
async fn read_form(
    multipart: &mut Multipart,
    max_image_bytes: usize,
) -> Result<NarrationForm, ApiError> {
    let mut form = NarrationForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::from_multipart(&e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(IMAGE_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = read_limited(field, max_image_bytes).await?;
                form.image = Some(ImageUpload {
                    bytes,
                    content_type,
                    file_name,
                });
            },
            Some(VOICE_FIELD) => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::from_multipart(&e))?;
                form.voice_id = Some(text);
            },
            other => {
                debug!(field = other.unwrap_or(""), "Ignoring multipart field");
            },
        }
    }

    Ok(form)
}

/// Read a file field, stopping as soon as it exceeds `max` bytes
async fn read_limited(mut field: Field<'_>, max: usize) -> Result<Vec<u8>, ApiError> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| ApiError::from_multipart(&e))?
    {
        let size = bytes.len() + chunk.len();
        if size > max {
            return Err(DomainError::ImageTooLarge { size, max }.into());
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

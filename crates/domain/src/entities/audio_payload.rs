//! Synthesized audio payload

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Format of synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    /// MP3 (the format returned to browsers)
    #[default]
    Mp3,
    /// Ogg container with Vorbis codec
    OggVorbis,
}

impl AudioFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::OggVorbis => "audio/ogg",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mp3 => write!(f, "mp3"),
            Self::OggVorbis => write!(f, "ogg_vorbis"),
        }
    }
}

/// A complete, contiguous audio buffer tagged with its format
#[derive(Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: Vec<u8>,
    format: AudioFormat,
}

impl fmt::Debug for AudioPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioPayload")
            .field("size_bytes", &self.data.len())
            .field("format", &self.format)
            .finish()
    }
}

impl AudioPayload {
    /// Create a new audio payload
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// MIME type of the payload
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Size in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Render as a `data:` URI, e.g. `data:audio/mpeg;base64,SUQz...`
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp3_mime_type() {
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
    }

    #[test]
    fn ogg_mime_type() {
        assert_eq!(AudioFormat::OggVorbis.mime_type(), "audio/ogg");
    }

    #[test]
    fn default_format_is_mp3() {
        assert_eq!(AudioFormat::default(), AudioFormat::Mp3);
    }

    #[test]
    fn format_display() {
        assert_eq!(AudioFormat::Mp3.to_string(), "mp3");
        assert_eq!(AudioFormat::OggVorbis.to_string(), "ogg_vorbis");
    }

    #[test]
    fn format_deserializes_snake_case() {
        let format: AudioFormat = serde_json::from_str("\"ogg_vorbis\"").unwrap();
        assert_eq!(format, AudioFormat::OggVorbis);
    }

    #[test]
    fn data_uri_encodes_bytes() {
        let payload = AudioPayload::new(b"ID3".to_vec(), AudioFormat::Mp3);
        assert_eq!(payload.to_data_uri(), "data:audio/mpeg;base64,SUQz");
    }

    #[test]
    fn data_uri_of_empty_payload() {
        let payload = AudioPayload::new(Vec::new(), AudioFormat::Mp3);
        assert!(payload.is_empty());
        assert_eq!(payload.to_data_uri(), "data:audio/mpeg;base64,");
    }

    #[test]
    fn payload_accessors() {
        let payload = AudioPayload::new(vec![1, 2, 3, 4], AudioFormat::OggVorbis);
        assert_eq!(payload.size_bytes(), 4);
        assert_eq!(payload.data(), &[1, 2, 3, 4]);
        assert_eq!(payload.format(), AudioFormat::OggVorbis);
        assert_eq!(payload.mime_type(), "audio/ogg");
    }

    #[test]
    fn debug_omits_bytes() {
        let payload = AudioPayload::new(vec![9; 32], AudioFormat::Mp3);
        let debug = format!("{payload:?}");
        assert!(debug.contains("size_bytes: 32"));
    }
}

//! Voice identifier value object
//!
//! Names a speech-synthesis voice. Only emptiness is checked here; the
//! speech service is the authority on which voices exist.
//!
//! # Examples
//!
//! ```
//! use domain::VoiceId;
//!
//! let voice = VoiceId::new(" Vitoria ").unwrap();
//! assert_eq!(voice.as_str(), "Vitoria");
//!
//! // Blank form fields fall back to the default voice
//! assert_eq!(VoiceId::parse_optional(Some("   ")), None);
//! assert_eq!(VoiceId::default().as_str(), "Camila");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A speech-synthesis voice name (e.g. "Camila")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoiceId(String);

impl VoiceId {
    /// Voice used when the client does not choose one
    pub const DEFAULT: &'static str = "Camila";

    /// Create a voice id from a non-blank name
    ///
    /// # Errors
    ///
    /// Returns `InvalidVoiceId` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidVoiceId(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Interpret an optional form value; absent and blank values yield `None`
    ///
    /// ```
    /// use domain::VoiceId;
    ///
    /// assert_eq!(VoiceId::parse_optional(None), None);
    /// assert_eq!(
    ///     VoiceId::parse_optional(Some("Ricardo")).map(|v| v.to_string()),
    ///     Some("Ricardo".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse_optional(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    /// Get the voice name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VoiceId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VoiceId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for VoiceId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VoiceId> for String {
    fn from(voice: VoiceId) -> Self {
        voice.0
    }
}

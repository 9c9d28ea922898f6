//! Configuration for speech synthesis

use domain::{AudioFormat, LanguageCode, VoiceId};
use serde::{Deserialize, Serialize};

/// Configuration for the speech synthesis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Voice used when the caller does not choose one
    #[serde(default)]
    pub default_voice: VoiceId,

    /// Language the narration is spoken in
    #[serde(default = "default_language_code")]
    pub language_code: LanguageCode,

    /// Synthesis engine
    #[serde(default)]
    pub engine: SpeechEngine,

    /// Output audio format
    #[serde(default)]
    pub output_format: AudioFormat,
}

/// Polly synthesis engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpeechEngine {
    /// Standard concatenative voices
    #[default]
    Standard,
    /// Neural voices
    Neural,
    /// Generative voices
    Generative,
    /// Long-form voices
    LongForm,
}

impl SpeechEngine {
    /// Engine name as the service expects it
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Neural => "neural",
            Self::Generative => "generative",
            Self::LongForm => "long-form",
        }
    }

    /// Whether this engine can speak with `voice`
    ///
    /// Only the Portuguese voices are catalogued; any other name is assumed
    /// to be supported and left for the service to validate.
    #[must_use]
    pub fn supports_voice(&self, voice: &str) -> bool {
        PORTUGUESE_VOICES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(voice))
            .is_none_or(|(_, engines)| engines.contains(self))
    }
}

/// Portuguese Polly voices and the engines that offer them
const PORTUGUESE_VOICES: &[(&str, &[SpeechEngine])] = &[
    ("Camila", &[SpeechEngine::Standard, SpeechEngine::Neural]),
    ("Vitoria", &[SpeechEngine::Standard, SpeechEngine::Neural]),
    ("Ricardo", &[SpeechEngine::Standard]),
    ("Thiago", &[SpeechEngine::Neural]),
    ("Ines", &[SpeechEngine::Standard, SpeechEngine::Neural]),
    ("Cristiano", &[SpeechEngine::Standard]),
];

fn default_language_code() -> LanguageCode {
    LanguageCode::brazilian_portuguese()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            default_voice: VoiceId::default(),
            language_code: default_language_code(),
            engine: SpeechEngine::default(),
            output_format: AudioFormat::default(),
        }
    }
}

//! Value Objects - Immutable, identity-less domain primitives

mod language_code;
mod voice_id;

pub use language_code::LanguageCode;
pub use voice_id::VoiceId;

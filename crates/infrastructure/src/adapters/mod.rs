//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod speech_adapter;
mod translation_adapter;
mod vision_adapter;

pub use speech_adapter::SpeechAdapter;
pub use translation_adapter::TranslationAdapter;
pub use vision_adapter::VisionAdapter;

//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod speech_synthesis_port;
mod translation_port;
mod vision_port;

#[cfg(test)]
pub use speech_synthesis_port::MockSpeechSynthesisPort;
pub use speech_synthesis_port::SpeechSynthesisPort;
#[cfg(test)]
pub use translation_port::MockTranslationPort;
pub use translation_port::TranslationPort;
#[cfg(test)]
pub use vision_port::MockVisionPort;
pub use vision_port::VisionPort;

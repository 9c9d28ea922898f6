//! Speech provider implementations
//!
//! Contains concrete implementations of the `TextToSpeech` trait.

pub mod polly;

pub use polly::PollySpeechProvider;

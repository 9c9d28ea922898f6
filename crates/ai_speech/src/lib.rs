//! AI Speech - Text-to-Speech abstractions
//!
//! Provides the `TextToSpeech` trait (port) and an AWS Polly implementation
//! that turns narration text into a single MP3 buffer.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{PollySpeechProvider, SpeechConfig, TextToSpeech};
//!
//! let provider = PollySpeechProvider::new(&sdk_config, SpeechConfig::default())?;
//! let audio = provider.synthesize("Olá, mundo!", None).await?;
//! let uri = audio.to_data_uri();
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;

pub use config::{SpeechConfig, SpeechEngine};
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::polly::PollySpeechProvider;

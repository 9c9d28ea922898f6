//! AI Vision - image analysis abstractions
//!
//! Provides the `ImageAnalyzer` trait and an AWS Rekognition implementation:
//! - label detection (objects and scenes, with confidence)
//! - face detection (gender, age range, emotions of the primary face)
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
//! use ai_vision::{ImageAnalyzer, RekognitionVisionProvider, VisionConfig};
//!
//! let provider = RekognitionVisionProvider::new(&sdk_config, VisionConfig::default())?;
//! let labels = provider.detect_labels(&bytes).await?;
//! let face = provider.detect_faces(&bytes).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;

pub use config::VisionConfig;
pub use error::VisionError;
pub use ports::ImageAnalyzer;
pub use providers::rekognition::RekognitionVisionProvider;

//! Vision provider implementations
//!
//! Contains concrete implementations of the `ImageAnalyzer` trait.

pub mod rekognition;

pub use rekognition::RekognitionVisionProvider;

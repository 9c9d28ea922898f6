//! Google Translate integration
//!
//! Client for the public `translate_a/single` web endpoint
//! (<https://translate.googleapis.com>). No API key is required.

pub mod client;
mod response;

pub use client::{GoogleTranslateClient, TranslateConfig, TranslateError, TranslationClient};

//! Domain layer for Scene Narrator
//!
//! Contains the request-scoped entities that flow through the narration
//! pipeline, value objects, and domain errors.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

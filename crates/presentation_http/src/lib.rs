//! Scene Narrator HTTP presentation layer
//!
//! This crate provides the HTTP API and serves the static frontend.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::{create_router, with_frontend};
pub use server::{ShutdownOutcome, serve_with_shutdown};
pub use state::AppState;

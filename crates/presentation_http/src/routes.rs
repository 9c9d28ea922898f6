//! Route definitions

use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Room for multipart boundaries, part headers and the voice field
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_image_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .route(
            "/api/process-image",
            post(handlers::process_image::process_image).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// Serve static frontend files for any path the API does not claim
///
/// `/` resolves to `index.html` inside `dir`.
pub fn with_frontend(router: Router, dir: impl AsRef<Path>) -> Router {
    router.fallback_service(ServeDir::new(dir))
}

//! Scene Narrator HTTP Server
//!
//! Main entry point: loads configuration, wires the AWS and translation
//! adapters into the narration service, and serves the API and frontend.

use std::{sync::Arc, time::Duration};

use application::ImageNarrationService;
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, SpeechAdapter, TelemetryConfig, TranslationAdapter, VisionAdapter, init_telemetry,
    load_sdk_config,
};
use presentation_http::{AppState, RequestIdLayer, ShutdownOutcome, routes, serve_with_shutdown};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();

    let (telemetry, json_logs) = match &loaded {
        Ok(config) => (config.telemetry.clone(), config.server.is_json_logging()),
        Err(_) => (TelemetryConfig::default(), false),
    };
    init_telemetry(&telemetry, json_logs)?;

    info!(
        "🎙️ {} v{} starting...",
        telemetry.service_name,
        env!("CARGO_PKG_VERSION")
    );

    let config = match loaded.and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "❌ Invalid configuration");
            std::process::exit(1);
        },
    };

    info!(
        host = %config.server.host,
        port = config.server.port,
        region = %config.aws.region,
        access_key = config.aws.masked_access_key().as_deref().unwrap_or("-"),
        max_image_bytes = config.server.max_image_bytes,
        "Configuration loaded"
    );
    if let Some(endpoint) = &config.aws.endpoint_url {
        warn!(endpoint = %endpoint, "Using custom AWS endpoint");
    }

    // Initialize adapters
    let sdk_config = load_sdk_config(&config.aws).await?;

    let vision = VisionAdapter::rekognition(&sdk_config, config.vision.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize vision: {e}"))?;
    let translation = TranslationAdapter::google(config.translation.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize translation: {e}"))?;
    let speech = SpeechAdapter::polly(&sdk_config, config.speech.clone());

    info!(default_voice = %speech.default_voice(), "Speech synthesis ready");

    let narration_service =
        ImageNarrationService::new(Arc::new(vision), Arc::new(translation), Arc::new(speech));

    let state = AppState::new(Arc::new(narration_service))
        .with_max_image_bytes(config.server.max_image_bytes);

    let app = routes::with_frontend(routes::create_router(state), &config.server.static_dir);

    let app = if config.server.cors_enabled {
        app.layer(cors_layer(&config.server.allowed_origins))
    } else {
        app
    };

    // Request IDs outermost so the trace span nests inside them
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("🖼️ Frontend served from {}", config.server.static_dir);

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    match serve_with_shutdown(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("👋 Server shutdown complete"),
        ShutdownOutcome::TimedOut => warn!("👋 Server shutdown forced"),
    }

    Ok(())
}

/// Allow any origin when none are configured, otherwise only the listed ones
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

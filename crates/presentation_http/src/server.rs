//! Serving with a bounded graceful shutdown

use std::{future::Future, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every in-flight connection finished
    Drained,
    /// Connections were still open when the drain timeout elapsed
    TimedOut,
}

/// Serve `app` until `signal` resolves, then give open connections at most
/// `drain_timeout` to finish before returning.
///
/// # Errors
///
/// Returns the listener's I/O error if serving fails.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain_timeout: Duration,
) -> std::io::Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, fired_rx) = oneshot::channel::<()>();
    let signal = async move {
        signal.await;
        let _ = fired_tx.send(());
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map(|()| ShutdownOutcome::Drained),
        _ = fired_rx => {},
    }

    info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);

    if let Ok(result) = tokio::time::timeout(drain_timeout, server).await {
        result.map(|()| ShutdownOutcome::Drained)
    } else {
        warn!(
            timeout_secs = drain_timeout.as_secs_f64(),
            "Shutdown timeout elapsed with connections still open"
        );
        Ok(ShutdownOutcome::TimedOut)
    }
}

//! Telemetry and logging infrastructure
//!
//! Installs the global `tracing` subscriber used by the server binary.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};

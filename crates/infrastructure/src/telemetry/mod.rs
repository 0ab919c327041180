//! Telemetry infrastructure
//!
//! Sets up the `tracing` subscriber used by the binaries.

mod logging;

pub use logging::{LogFormat, TelemetryError, init_logging};

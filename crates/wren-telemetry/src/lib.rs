//! Structured logging for Wren.
//!
//! Routers log registrations and mounts through `tracing`. This crate installs
//! a `tracing-subscriber` registry that writes those events as JSON or in a
//! human-readable format.
//!
//! # Example
//!
//! ```rust,no_run
//! use wren_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development()).unwrap();
//! tracing::info!(router = "router#0", "ready");
//! ```

mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig, LogFormat};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

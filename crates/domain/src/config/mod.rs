//! Configuration module for dnsdrone
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `probe`: Query set, rate and resolver selection
//! - `metrics`: Prometheus endpoint
//! - `logging`: Logging settings
//! - `duration`: `5s` / `250ms` style durations
//! - `errors`: Configuration errors

pub mod duration;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod probe;
pub mod root;

pub use duration::parse_duration;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use metrics::MetricsConfig;
pub use probe::{ProbeConfig, QueryEntry};
pub use root::{CliOverrides, Config};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::metrics::MetricsConfig;
use super::probe::ProbeConfig;
use crate::ProbeQuery;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Complete prober configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub probe: ProbeConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line. `Some` wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub qps: Option<u32>,
    pub names: Option<String>,
    pub timeout: Option<Duration>,
    pub delay: Option<Duration>,
    pub local_resolver: Option<bool>,
    pub resolv_conf: Option<String>,
    pub max_in_flight: Option<usize>,
    pub metrics_bind: Option<String>,
    pub verbose: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the optional TOML file, then applies command line overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(qps) = overrides.qps {
            self.probe.qps = qps;
        }
        if let Some(names) = overrides.names {
            self.probe.names = vec![names];
        }
        if let Some(timeout) = overrides.timeout {
            self.probe.timeout = timeout;
        }
        if let Some(delay) = overrides.delay {
            self.probe.delay = delay;
        }
        if let Some(local) = overrides.local_resolver {
            self.probe.local_resolver = local;
        }
        if let Some(path) = overrides.resolv_conf {
            self.probe.resolv_conf = path;
        }
        if let Some(max) = overrides.max_in_flight {
            self.probe.max_in_flight = max;
        }
        if let Some(bind) = overrides.metrics_bind {
            self.metrics.bind_address = bind;
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// The ordered query set the scheduler cycles through.
    pub fn queries(&self) -> Vec<ProbeQuery> {
        self.probe.build_queries()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.qps == 0 {
            return Err(ConfigError::InvalidQps(self.probe.qps));
        }
        if self.queries().is_empty() {
            return Err(ConfigError::NoQueries);
        }
        if !self.probe.local_resolver && self.probe.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }
        self.metrics.socket_addr()?;
        Ok(())
    }
}

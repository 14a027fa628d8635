use serde::{Deserialize, Serialize};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (default: "info")
    /// Options: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log every query sent and every response received
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub format: LogFormat,
}

/// Targets that emit the per-probe lines.
const VERBOSE_TARGETS: [&str; 2] = ["dnsdrone_application", "dnsdrone_infrastructure::dns::resolver"];

impl LoggingConfig {
    /// Filter directive for the subscriber. Verbose mode raises only the
    /// probe targets to debug; everything else stays at `level`.
    pub fn filter_directive(&self) -> String {
        let level = self.level.to_lowercase();
        if !self.verbose || level == "debug" || level == "trace" {
            return level;
        }

        let mut directive = level;
        for target in VERBOSE_TARGETS {
            directive.push(',');
            directive.push_str(target);
            directive.push_str("=debug");
        }
        directive
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("No query names found")]
    NoQueries,

    #[error("Invalid qps {0}: must be a positive integer")]
    InvalidQps(u32),

    #[error("Invalid duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    #[error("Invalid timeout: must be greater than zero")]
    ZeroTimeout,

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Failed to read resolver configuration {path}: {reason}")]
    ResolverConfigRead { path: String, reason: String },

    #[error("Resolver configuration {path} is malformed: {reason}")]
    ResolverConfigMalformed { path: String, reason: String },
}

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// Address of the Prometheus endpoint. `:9696` listens on all interfaces.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Prefix of every exported metric name
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl MetricsConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = self.bind_address.trim();
        let candidate = if raw.starts_with(':') {
            format!("0.0.0.0{}", raw)
        } else {
            raw.to_string()
        };

        candidate
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.bind_address.clone()))
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            namespace: default_namespace(),
        }
    }
}

fn default_bind_address() -> String {
    ":9696".to_string()
}

fn default_namespace() -> String {
    "dnsdrone".to_string()
}

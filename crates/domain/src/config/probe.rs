use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::duration::serde_duration;
use crate::{ProbeQuery, RecordType};

/// A typed query entry from the config file.
///
/// ```toml
/// [[probe.queries]]
/// name = "example.com"
/// record_type = "AAAA"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryEntry {
    pub name: String,

    #[serde(default = "default_record_type")]
    pub record_type: RecordType,
}

/// Probe scheduling and resolver selection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// DNS queries per second
    #[serde(default = "default_qps")]
    pub qps: u32,

    /// Host names asked for as A records
    #[serde(default)]
    pub names: Vec<String>,

    /// Queries with an explicit record type; sent before `names`
    #[serde(default)]
    pub queries: Vec<QueryEntry>,

    /// Per-query timeout, only applied when talking to a nameserver directly
    #[serde(default = "default_timeout", with = "serde_duration")]
    pub timeout: Duration,

    /// Time to wait before the first query
    #[serde(default, with = "serde_duration")]
    pub delay: Duration,

    /// Use the host resolver instead of the first nameserver of `resolv_conf`
    #[serde(default = "default_true")]
    pub local_resolver: bool,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Upper bound on probes in flight; 0 means unbounded
    #[serde(default)]
    pub max_in_flight: usize,
}

impl ProbeConfig {
    /// Tick period for the configured rate.
    pub fn period(&self) -> Duration {
        Duration::from_nanos((1_000_000_000 / u64::from(self.qps.max(1))).max(1))
    }

    /// Typed file queries first, then plain names, in configuration order.
    /// Entries with an empty name are dropped.
    pub fn build_queries(&self) -> Vec<ProbeQuery> {
        let typed = self
            .queries
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(|entry| ProbeQuery::new(entry.name.trim(), entry.record_type));

        let named = self
            .names
            .iter()
            .flat_map(|name| ProbeQuery::from_name_list(name));

        typed.chain(named).collect()
    }

    pub fn max_in_flight(&self) -> Option<usize> {
        (self.max_in_flight > 0).then_some(self.max_in_flight)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            qps: default_qps(),
            names: Vec::new(),
            queries: Vec::new(),
            timeout: default_timeout(),
            delay: Duration::ZERO,
            local_resolver: true,
            resolv_conf: default_resolv_conf(),
            max_in_flight: 0,
        }
    }
}

fn default_qps() -> u32 {
    1
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_true() -> bool {
    true
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_record_type() -> RecordType {
    RecordType::A
}

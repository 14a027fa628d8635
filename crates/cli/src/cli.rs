use clap::Parser;
use dnsdrone_domain::config::parse_duration;
use dnsdrone_domain::CliOverrides;
use std::time::Duration;

/// Command line flags. Anything left unset falls back to the config file,
/// then to the built-in default.
#[derive(Parser, Debug)]
#[command(name = "dnsdrone")]
#[command(version)]
#[command(about = "Sends a steady stream of DNS queries and exports the outcomes as Prometheus metrics")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Number of queries to send per second [default: 1]
    #[arg(long)]
    pub qps: Option<u32>,

    /// Address the Prometheus endpoint listens on [default: :9696]
    #[arg(long = "prom", value_name = "ADDR")]
    pub prom: Option<String>,

    /// Comma separated list of names to query
    #[arg(long)]
    pub names: Option<String>,

    /// Per-query timeout when talking to a nameserver directly [default: 5s]
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Log every query sent and every response received
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Resolve through the host resolver instead of querying the nameserver [default: true]
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub local_resolver: Option<bool>,

    /// Wait this long before sending the first query [default: 0s]
    #[arg(long, value_parser = parse_duration)]
    pub delay: Option<Duration>,

    /// Resolver configuration file holding the nameserver [default: /etc/resolv.conf]
    #[arg(long, value_name = "FILE")]
    pub resolv_conf: Option<String>,

    /// Skip ticks while this many queries are in flight; 0 means unbounded [default: 0]
    #[arg(long)]
    pub max_in_flight: Option<usize>,

    /// Log level: trace, debug, info, warn or error [default: info]
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            qps: self.qps,
            names: self.names.clone(),
            timeout: self.timeout,
            delay: self.delay,
            local_resolver: self.local_resolver,
            resolv_conf: self.resolv_conf.clone(),
            max_in_flight: self.max_in_flight,
            metrics_bind: self.prom.clone(),
            verbose: self.verbose.then_some(true),
            log_level: self.log_level.clone(),
        }
    }
}

pub mod metrics_sink;
pub mod probe_resolver;

pub use metrics_sink::MetricsSink;
pub use probe_resolver::ProbeResolver;

pub mod exposition;
pub mod histogram;
pub mod probe_metrics;

pub use exposition::{render_prometheus, render_snapshot, CONTENT_TYPE};
pub use histogram::{exponential_buckets, AtomicHistogram, HistogramSnapshot};
pub use probe_metrics::{MetricsSnapshot, ProbeMetrics};

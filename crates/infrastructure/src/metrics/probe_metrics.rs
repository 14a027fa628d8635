use super::histogram::{exponential_buckets, AtomicHistogram, HistogramSnapshot};
use dashmap::DashMap;
use dnsdrone_application::ports::MetricsSink;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Request duration buckets: 0.25ms doubling up to 8.192s.
pub const DURATION_BUCKET_START: f64 = 0.00025;
pub const DURATION_BUCKET_FACTOR: f64 = 2.0;
pub const DURATION_BUCKET_COUNT: usize = 16;

/// Process-wide probe counters. Append only; never reset.
pub struct ProbeMetrics {
    namespace: Arc<str>,
    requests: AtomicU64,
    responses: DashMap<Arc<str>, AtomicU64>,
    lost: AtomicU64,
    skipped: AtomicU64,
    request_duration: AtomicHistogram,
}

/// Point-in-time copy of every counter, for exposition and tests.
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub requests: u64,
    /// Sorted by label.
    pub responses: Vec<(Arc<str>, u64)>,
    pub lost: u64,
    pub skipped: u64,
    pub request_duration: HistogramSnapshot,
}

impl MetricsSnapshot {
    pub fn responses_for(&self, rcode: &str) -> u64 {
        self.responses
            .iter()
            .find(|(label, _)| label.as_ref() == rcode)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total_responses(&self) -> u64 {
        self.responses.iter().map(|(_, count)| count).sum()
    }
}

impl ProbeMetrics {
    pub fn new(namespace: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            requests: AtomicU64::new(0),
            responses: DashMap::new(),
            lost: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
            request_duration: AtomicHistogram::new(exponential_buckets(
                DURATION_BUCKET_START,
                DURATION_BUCKET_FACTOR,
                DURATION_BUCKET_COUNT,
            )),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let mut responses: Vec<(Arc<str>, u64)> = self
            .responses
            .iter()
            .map(|entry| (Arc::clone(entry.key()), entry.value().load(Ordering::Relaxed)))
            .collect();
        responses.sort_by(|a, b| a.0.cmp(&b.0));

        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            responses,
            lost: self.lost.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            request_duration: self.request_duration.snapshot(),
        }
    }
}

impl Default for ProbeMetrics {
    fn default() -> Self {
        Self::new("dnsdrone")
    }
}

impl MetricsSink for ProbeMetrics {
    fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_response(&self, rcode: &str) {
        if let Some(counter) = self.responses.get(rcode) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }
        self.responses
            .entry(Arc::from(rcode))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    fn increment_lost(&self) {
        self.lost.fetch_add(1, Ordering::Relaxed);
    }

    fn observe_latency(&self, seconds: f64) {
        self.request_duration.observe(seconds);
    }

    fn increment_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use dnsdrone_application::ports::{MetricsSink, ProbeResolver};
use dnsdrone_domain::{DomainError, ProbeQuery, Resolution, ResolutionSignal};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock ProbeResolver
// ============================================================================

pub struct MockProbeResolver {
    signal: ResolutionSignal,
    delay: Duration,
    calls: Mutex<Vec<Arc<str>>>,
    call_count: Arc<AtomicU64>,
}

impl MockProbeResolver {
    pub fn new(signal: ResolutionSignal) -> Self {
        Self {
            signal,
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}

#[async_trait]
impl ProbeResolver for MockProbeResolver {
    async fn resolve(&self, query: &ProbeQuery) -> Result<Resolution, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(Arc::clone(&query.domain));

        let started = tokio::time::Instant::now();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(Resolution::new(self.signal.clone(), started.elapsed()))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

// ============================================================================
// Recording MetricsSink
// ============================================================================

#[derive(Default)]
pub struct RecordingMetrics {
    requests: AtomicU64,
    lost: AtomicU64,
    skipped: AtomicU64,
    responses: Mutex<HashMap<String, u64>>,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn lost(&self) -> u64 {
        self.lost.load(Ordering::SeqCst)
    }

    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::SeqCst)
    }

    pub fn responses(&self, rcode: &str) -> u64 {
        self.responses
            .lock()
            .unwrap()
            .get(rcode)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_responses(&self) -> u64 {
        self.responses.lock().unwrap().values().sum()
    }
}

impl MetricsSink for RecordingMetrics {
    fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_response(&self, rcode: &str) {
        *self
            .responses
            .lock()
            .unwrap()
            .entry(rcode.to_string())
            .or_insert(0) += 1;
    }

    fn increment_lost(&self) {
        self.lost.fetch_add(1, Ordering::SeqCst);
    }

    fn observe_latency(&self, _seconds: f64) {}

    fn increment_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }
}

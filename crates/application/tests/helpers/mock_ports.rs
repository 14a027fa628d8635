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
    signal: Mutex<ResolutionSignal>,
    delay: Duration,
    should_fail: Mutex<bool>,
    calls: Mutex<Vec<Arc<str>>>,
    call_count: Arc<AtomicU64>,
}

impl MockProbeResolver {
    pub fn new(signal: ResolutionSignal) -> Self {
        Self {
            signal: Mutex::new(signal),
            delay: Duration::ZERO,
            should_fail: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn calls(&self) -> Vec<Arc<str>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProbeResolver for MockProbeResolver {
    async fn resolve(&self, query: &ProbeQuery) -> Result<Resolution, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.calls.lock().unwrap().push(Arc::clone(&query.domain));

        let started = tokio::time::Instant::now();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::InvalidDomainName(query.domain.to_string()));
        }

        let signal = self.signal.lock().unwrap().clone();
        Ok(Resolution::new(signal, started.elapsed()))
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
    latencies: Mutex<Vec<f64>>,
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

    pub fn latencies(&self) -> Vec<f64> {
        self.latencies.lock().unwrap().clone()
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

    fn observe_latency(&self, seconds: f64) {
        self.latencies.lock().unwrap().push(seconds);
    }

    fn increment_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }
}

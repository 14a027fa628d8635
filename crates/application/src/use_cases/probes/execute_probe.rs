use crate::ports::{MetricsSink, ProbeResolver};
use crate::services::ResponseClassifier;
use dnsdrone_domain::{ProbeQuery, ProbeResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Use case: send one probe, classify the answer and record it.
///
/// Every call ends in exactly one response or lost increment, whatever the
/// resolver does.
pub struct ExecuteProbeUseCase {
    resolver: Arc<dyn ProbeResolver>,
    metrics: Arc<dyn MetricsSink>,
}

impl ExecuteProbeUseCase {
    pub fn new(resolver: Arc<dyn ProbeResolver>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self { resolver, metrics }
    }

    /// Counts a probe as issued. Called by the scheduler at dispatch time,
    /// before the probe task runs.
    pub fn record_dispatch(&self) {
        self.metrics.increment_requests();
    }

    /// Counts a tick that was not dispatched.
    pub fn record_skip(&self) {
        self.metrics.increment_skipped();
    }

    pub async fn execute(&self, query: &ProbeQuery) -> ProbeResult {
        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            "Sending query"
        );

        let started = Instant::now();
        let result = match self.resolver.resolve(query).await {
            Ok(resolution) => ResponseClassifier::to_result(&resolution),
            Err(e) => {
                debug!(domain = %query.domain, error = %e, "Error sending query");
                ResponseClassifier::from_error(&e, started.elapsed())
            }
        };

        self.record(&result);

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            outcome = %result.outcome,
            latency_ms = result.elapsed.as_millis() as u64,
            "Received response"
        );

        result
    }

    fn record(&self, result: &ProbeResult) {
        if let Some(latency) = result.latency {
            self.metrics.observe_latency(latency.as_secs_f64());
        }

        match result.outcome.rcode_label() {
            Some(rcode) => self.metrics.increment_response(rcode),
            None => self.metrics.increment_lost(),
        }
    }
}

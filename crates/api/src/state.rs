use dnsdrone_infrastructure::metrics::ProbeMetrics;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<ProbeMetrics>,
}

impl AppState {
    pub fn new(metrics: Arc<ProbeMetrics>) -> Self {
        Self { metrics }
    }
}

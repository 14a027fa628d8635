use crate::ProbeSchedulerJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_probe_scheduler(ProbeSchedulerJob::new(probe, queries, period))
///     .start();
/// ```
pub struct JobRunner {
    probe_scheduler: Option<ProbeSchedulerJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            probe_scheduler: None,
        }
    }

    pub fn with_probe_scheduler(mut self, job: ProbeSchedulerJob) -> Self {
        self.probe_scheduler = Some(job);
        self
    }

    /// Start all registered jobs. Each handle resolves to the number of
    /// probes the job dispatched.
    pub fn start(self) -> Vec<JoinHandle<u64>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        if let Some(job) = self.probe_scheduler {
            handles.push(Arc::new(job).start());
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

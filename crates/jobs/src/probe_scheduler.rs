use crate::query_set::{QueryCursor, QuerySet};
use dnsdrone_application::use_cases::ExecuteProbeUseCase;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SchedulerState {
    Idle = 0,
    Running = 1,
    Stopped = 2,
}

impl SchedulerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => SchedulerState::Idle,
            1 => SchedulerState::Running,
            _ => SchedulerState::Stopped,
        }
    }
}

/// Dispatches one probe per tick, cycling through the query set.
///
/// Probes run as independent tasks and are never awaited by the loop.
/// Cancellation is polled before the clock, so once the token fires no
/// further probe is dispatched. In-flight probes are left to finish.
pub struct ProbeSchedulerJob {
    probe: Arc<ExecuteProbeUseCase>,
    queries: QuerySet,
    period: Duration,
    startup_delay: Duration,
    max_in_flight: Option<usize>,
    state: AtomicU8,
    shutdown: CancellationToken,
}

impl ProbeSchedulerJob {
    pub fn new(probe: Arc<ExecuteProbeUseCase>, queries: QuerySet, period: Duration) -> Self {
        Self {
            probe,
            queries,
            period: period.max(Duration::from_nanos(1)),
            startup_delay: Duration::ZERO,
            max_in_flight: None,
            state: AtomicU8::new(SchedulerState::Idle as u8),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// Caps concurrent probes. `None` or `Some(0)` means unbounded; larger
    /// caps are clamped to what a semaphore can hold.
    pub fn with_max_in_flight(mut self, limit: Option<usize>) -> Self {
        self.max_in_flight = limit
            .filter(|n| *n > 0)
            .map(|n| n.min(Semaphore::MAX_PERMITS));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn state(&self) -> SchedulerState {
        SchedulerState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn max_in_flight(&self) -> Option<usize> {
        self.max_in_flight
    }

    fn set_state(&self, state: SchedulerState) {
        self.state.store(state as u8, Ordering::Release);
    }

    /// Spawns the dispatch loop. The handle yields the number of probes
    /// dispatched once the loop has stopped.
    pub fn start(self: Arc<Self>) -> JoinHandle<u64> {
        info!(
            queries = self.queries.len(),
            period_ms = self.period.as_secs_f64() * 1000.0,
            max_in_flight = ?self.max_in_flight,
            "Starting probe scheduler"
        );

        tokio::spawn(async move { self.run().await })
    }

    /// Runs the dispatch loop on the current task until cancelled.
    pub async fn run(&self) -> u64 {
        if !self.startup_delay.is_zero() {
            debug!(delay = ?self.startup_delay, "Waiting before first probe");
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!("ProbeScheduler: cancelled during startup delay");
                    self.set_state(SchedulerState::Stopped);
                    return 0;
                }
                _ = tokio::time::sleep(self.startup_delay) => {}
            }
        }

        self.set_state(SchedulerState::Running);

        let mut cursor = QueryCursor::new(self.queries.clone());
        let limiter = self.max_in_flight.map(|n| Arc::new(Semaphore::new(n)));
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut dispatched = 0u64;
        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!(dispatched, "ProbeScheduler: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    if self.dispatch(&mut cursor, limiter.as_ref()) {
                        dispatched += 1;
                    }
                }
            }
        }

        self.set_state(SchedulerState::Stopped);
        dispatched
    }

    /// Dispatches the query at the cursor. A tick refused by the in-flight
    /// cap leaves the cursor where it is.
    fn dispatch(&self, cursor: &mut QueryCursor, limiter: Option<&Arc<Semaphore>>) -> bool {
        let permit = match limiter {
            Some(semaphore) => match Arc::clone(semaphore).try_acquire_owned() {
                Ok(permit) => Some(permit),
                Err(_) => {
                    self.probe.record_skip();
                    warn!(
                        max_in_flight = self.max_in_flight.unwrap_or_default(),
                        "Too many probes in flight, skipping tick"
                    );
                    return false;
                }
            },
            None => None,
        };

        let query = cursor.next_query();
        self.probe.record_dispatch();

        let probe = Arc::clone(&self.probe);
        tokio::spawn(async move {
            let _permit = permit;
            probe.execute(&query).await;
        });

        true
    }
}

/// Accumulates probe results.
///
/// Every method may be called concurrently from any number of probe tasks;
/// implementations must not lose increments and must not require callers to
/// hold a lock.
pub trait MetricsSink: Send + Sync {
    fn increment_requests(&self);

    /// `rcode` is the outcome label; unseen labels start at zero.
    fn increment_response(&self, rcode: &str);

    fn increment_lost(&self);

    fn observe_latency(&self, seconds: f64);

    /// A tick was skipped because the in-flight limit was reached.
    fn increment_skipped(&self);
}

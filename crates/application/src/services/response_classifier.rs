use dnsdrone_domain::{DomainError, Outcome, ProbeResult, Resolution, ResolutionSignal};
use std::time::Duration;

/// Maps raw resolver signals onto the exported outcome taxonomy.
///
/// Host-resolver failures are coarse: anything that is neither a timeout
/// nor a missing name is reported as `other`. Only a nameserver reply keeps
/// its exact response code.
pub struct ResponseClassifier;

impl ResponseClassifier {
    pub fn classify(signal: &ResolutionSignal) -> Outcome {
        match signal {
            ResolutionSignal::Resolved => Outcome::Success,
            ResolutionSignal::NotFound => Outcome::NxDomain,
            ResolutionSignal::TimedOut => Outcome::Lost,
            ResolutionSignal::Failed(_) => Outcome::TransportError,
            ResolutionSignal::Answered(rcode) => Outcome::from_rcode(*rcode),
            ResolutionSignal::Unreachable(_) => Outcome::Lost,
        }
    }

    /// Whether the elapsed time is a round trip worth recording.
    ///
    /// A nameserver that never answered has no round trip; the host resolver
    /// always reports the time it spent, even when it gave up.
    pub fn observes_latency(signal: &ResolutionSignal) -> bool {
        !matches!(signal, ResolutionSignal::Unreachable(_))
    }

    pub fn to_result(resolution: &Resolution) -> ProbeResult {
        let latency = Self::observes_latency(&resolution.signal).then_some(resolution.elapsed);
        ProbeResult {
            outcome: Self::classify(&resolution.signal),
            elapsed: resolution.elapsed,
            latency,
        }
    }

    /// A probe that could not be issued still has to land in exactly one
    /// counter.
    pub fn from_error(_error: &DomainError, elapsed: Duration) -> ProbeResult {
        ProbeResult {
            outcome: Outcome::TransportError,
            elapsed,
            latency: None,
        }
    }
}

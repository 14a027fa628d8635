//! What one probe produces: the raw signal from a resolver, and the
//! classified outcome that ends up on the metrics.

use crate::rcode::rcode_label;
use std::fmt;
use std::time::Duration;

/// Raw result of a single resolution attempt, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSignal {
    /// Host resolver returned at least one address.
    Resolved,
    /// Host resolver reported that the name does not exist.
    NotFound,
    /// Host resolver gave up waiting for an answer.
    TimedOut,
    /// Host resolver failed for any other reason.
    Failed(String),
    /// Nameserver answered with this response code.
    Answered(u16),
    /// No answer came back from the nameserver (timeout, socket error,
    /// unparseable or mismatched reply).
    Unreachable(String),
}

/// Resolver output: the signal and the wall time spent obtaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub signal: ResolutionSignal,
    pub elapsed: Duration,
}

impl Resolution {
    pub fn new(signal: ResolutionSignal, elapsed: Duration) -> Self {
        Self { signal, elapsed }
    }
}

/// Outcome category of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    NxDomain,
    /// Any other response code received from a nameserver.
    ResponseCode(&'static str),
    /// Resolution failed for a reason that is neither a timeout nor a
    /// missing name. Exported as `other`.
    TransportError,
    Lost,
}

impl Outcome {
    /// Outcome for a response code received on the wire.
    pub fn from_rcode(rcode: u16) -> Self {
        match rcode_label(rcode) {
            "NOERROR" => Outcome::Success,
            "NXDOMAIN" => Outcome::NxDomain,
            label => Outcome::ResponseCode(label),
        }
    }

    /// Label for `response_count_total{rcode}`. `None` for lost probes,
    /// which are counted on the lost counter instead.
    pub fn rcode_label(&self) -> Option<&'static str> {
        match self {
            Outcome::Success => Some("NOERROR"),
            Outcome::NxDomain => Some("NXDOMAIN"),
            Outcome::ResponseCode(label) => Some(*label),
            Outcome::TransportError => Some("other"),
            Outcome::Lost => None,
        }
    }

    pub fn is_lost(&self) -> bool {
        matches!(self, Outcome::Lost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rcode_label().unwrap_or("LOST"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub outcome: Outcome,
    pub elapsed: Duration,
    /// Latency to record on the duration histogram, if any round trip
    /// was measured.
    pub latency: Option<Duration>,
}

use async_trait::async_trait;
use dnsdrone_application::ports::ProbeResolver;
use dnsdrone_domain::{DomainError, ProbeQuery, Resolution, ResolutionSignal};
use std::io;
use tokio::time::Instant;
use tracing::debug;

/// Failure messages the host resolver uses for names that do not exist
/// (glibc, musl, macOS and Windows wordings).
const NOT_FOUND_MARKERS: [&str; 6] = [
    "name or service not known",
    "no address associated",
    "nodename nor servname",
    "no such host",
    "host not found",
    "name does not resolve",
];

const TIMEOUT_MARKERS: [&str; 4] = [
    "temporary failure in name resolution",
    "try again",
    "timed out",
    "timeout",
];

/// Resolves through the host resolver (`getaddrinfo`).
///
/// The host's own timeout and retry policy applies. Only addresses are
/// looked up, whatever record type the query names.
#[derive(Debug, Clone, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a host resolver failure. Anything that is not clearly a
    /// missing name or a timeout is a generic failure.
    pub fn classify_lookup_error(error: &io::Error) -> ResolutionSignal {
        match error.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                return ResolutionSignal::TimedOut
            }
            io::ErrorKind::NotFound => return ResolutionSignal::NotFound,
            _ => {}
        }

        let message = error.to_string().to_lowercase();
        if NOT_FOUND_MARKERS.iter().any(|m| message.contains(m)) {
            ResolutionSignal::NotFound
        } else if TIMEOUT_MARKERS.iter().any(|m| message.contains(m)) {
            ResolutionSignal::TimedOut
        } else {
            ResolutionSignal::Failed(error.to_string())
        }
    }
}

#[async_trait]
impl ProbeResolver for SystemResolver {
    async fn resolve(&self, query: &ProbeQuery) -> Result<Resolution, DomainError> {
        let started = Instant::now();
        let lookup = tokio::net::lookup_host((query.domain.as_ref(), 0)).await;
        let elapsed = started.elapsed();

        let signal = match lookup {
            Ok(addrs) => {
                let count = addrs.count();
                debug!(domain = %query.domain, addresses = count, "Host lookup finished");
                if count == 0 {
                    ResolutionSignal::NotFound
                } else {
                    ResolutionSignal::Resolved
                }
            }
            Err(e) => {
                debug!(domain = %query.domain, error = %e, "Host lookup failed");
                Self::classify_lookup_error(&e)
            }
        };

        Ok(Resolution::new(signal, elapsed))
    }

    fn describe(&self) -> String {
        "local resolver".to_string()
    }
}

use async_trait::async_trait;
use dnsdrone_domain::{DomainError, ProbeQuery, Resolution};

/// Resolves one probe query and reports what happened.
///
/// Implementations measure wall time around the resolution call and turn
/// every failure they can observe into a [`ResolutionSignal`]. `Err` is
/// reserved for probes that could not be issued at all.
///
/// [`ResolutionSignal`]: dnsdrone_domain::ResolutionSignal
#[async_trait]
pub trait ProbeResolver: Send + Sync {
    async fn resolve(&self, query: &ProbeQuery) -> Result<Resolution, DomainError>;

    /// Short description of the resolution path for startup logs.
    fn describe(&self) -> String;
}

use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use dnsdrone_application::ports::ProbeResolver;
use dnsdrone_domain::{DomainError, ProbeQuery, Resolution, ResolutionSignal};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Sends each probe straight to one nameserver over UDP.
///
/// A reply yields its response code; no reply within `timeout` (or any
/// socket error, malformed reply or id mismatch) yields `Unreachable`.
pub struct NameserverResolver {
    transport: UdpTransport,
    timeout: Duration,
}

impl NameserverResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server),
            timeout,
        }
    }

    pub fn server(&self) -> SocketAddr {
        self.transport.server_addr()
    }

    async fn exchange(&self, id: u16, message_bytes: &[u8]) -> Result<u16, DomainError> {
        let response = tokio::time::timeout(
            self.timeout,
            self.transport.exchange(message_bytes, self.timeout),
        )
        .await
        .map_err(|_| DomainError::QueryTimeout)??;

        let parsed = ResponseParser::parse(&response)?;
        if parsed.id != id {
            return Err(DomainError::ResponseIdMismatch {
                expected: id,
                received: parsed.id,
            });
        }

        Ok(parsed.rcode_value())
    }
}

#[async_trait]
impl ProbeResolver for NameserverResolver {
    async fn resolve(&self, query: &ProbeQuery) -> Result<Resolution, DomainError> {
        let (id, message_bytes) =
            MessageBuilder::build_query_with_id(&query.domain, &query.record_type)?;

        let started = Instant::now();
        let exchanged = self.exchange(id, &message_bytes).await;
        let elapsed = started.elapsed();

        let signal = match exchanged {
            Ok(rcode) => ResolutionSignal::Answered(rcode),
            Err(e) => {
                debug!(
                    domain = %query.domain,
                    server = %self.server(),
                    error = %e,
                    "Error sending query"
                );
                ResolutionSignal::Unreachable(e.to_string())
            }
        };

        Ok(Resolution::new(signal, elapsed))
    }

    fn describe(&self) -> String {
        format!("nameserver {}", self.server())
    }
}

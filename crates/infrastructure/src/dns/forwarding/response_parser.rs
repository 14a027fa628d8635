use dnsdrone_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

/// DNS header is always 12 bytes.
const HEADER_LEN: usize = 12;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,
}

impl DnsResponse {
    /// Numeric response code, including EDNS extended bits.
    pub fn rcode_value(&self) -> u16 {
        u16::from(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response is {} bytes, shorter than a DNS header",
                response_bytes.len()
            )));
        }
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();

        debug!(id, rcode = ?rcode, "DNS response parsed");

        Ok(DnsResponse { id, rcode })
    }
}

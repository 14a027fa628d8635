#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server answers each query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Reply with this response code and no answers.
    Respond(u8),
    /// Reply after a delay.
    RespondAfter(u8, Duration),
    /// Reply with the transaction id flipped.
    WrongId(u8),
    /// Reply with fewer bytes than a DNS header.
    Garbage,
    /// Read the query and never reply.
    Silent,
    /// Reply from another local socket, never from the queried one.
    RespondFromElsewhere(u8),
    /// Reply with the first code from another socket, then with the
    /// second code from the queried one after a short pause.
    StrayThenRespond(u8, u8),
}

/// Minimal UDP DNS server on 127.0.0.1 with an OS-assigned port.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicU64>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await?);
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicU64::new(0));
        let received_clone = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        received_clone.fetch_add(1, Ordering::SeqCst);
                        let query = buf[..len].to_vec();

                        match behavior {
                            MockBehavior::Respond(rcode) => {
                                let response = build_response(&query, rcode);
                                let _ = socket.send_to(&response, peer).await;
                            }
                            MockBehavior::RespondAfter(rcode, delay) => {
                                let socket = Arc::clone(&socket);
                                tokio::spawn(async move {
                                    tokio::time::sleep(delay).await;
                                    let response = build_response(&query, rcode);
                                    let _ = socket.send_to(&response, peer).await;
                                });
                            }
                            MockBehavior::WrongId(rcode) => {
                                let mut response = build_response(&query, rcode);
                                if response.len() >= 2 {
                                    response[0] ^= 0xff;
                                    response[1] ^= 0xff;
                                }
                                let _ = socket.send_to(&response, peer).await;
                            }
                            MockBehavior::Garbage => {
                                let _ = socket.send_to(&[0xde, 0xad], peer).await;
                            }
                            MockBehavior::Silent => {}
                            MockBehavior::RespondFromElsewhere(rcode) => {
                                send_from_elsewhere(&build_response(&query, rcode), peer).await;
                            }
                            MockBehavior::StrayThenRespond(stray, rcode) => {
                                send_from_elsewhere(&build_response(&query, stray), peer).await;
                                let socket = Arc::clone(&socket);
                                tokio::spawn(async move {
                                    tokio::time::sleep(Duration::from_millis(50)).await;
                                    let response = build_response(&query, rcode);
                                    let _ = socket.send_to(&response, peer).await;
                                });
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> u64 {
        self.received.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn send_from_elsewhere(response: &[u8], peer: SocketAddr) {
    if let Ok(other) = UdpSocket::bind("127.0.0.1:0").await {
        let _ = other.send_to(response, peer).await;
    }
}

/// Echoes the query header and question back as a response carrying `rcode`.
pub fn build_response(query: &[u8], rcode: u8) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(query.len());

    response.extend_from_slice(&query[0..2]); // Transaction ID

    // QR=1, Opcode=0, AA=0, TC=0, RD copied from the query
    response.push(0x80 | (query[2] & 0x01));
    // RA=1, Z=0, RCODE
    response.push(0x80 | (rcode & 0x0f));

    response.extend_from_slice(&query[4..6]); // Questions
    response.extend_from_slice(&[0x00, 0x00]); // Answers
    response.extend_from_slice(&[0x00, 0x00]); // Authority
    response.extend_from_slice(&[0x00, 0x00]); // Additional

    // Question section only; any OPT record in the query is dropped
    if let Some(question_end) = question_end(query) {
        response.extend_from_slice(&query[12..question_end]);
    } else {
        response[4] = 0;
        response[5] = 0;
    }

    response
}

fn question_end(query: &[u8]) -> Option<usize> {
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    // QTYPE + QCLASS
    let end = pos + 4;
    (end <= query.len()).then_some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_copies_id_and_sets_rcode() {
        let query = vec![
            0xab, 0xcd, // ID
            0x01, 0x00, // Flags: RD
            0x00, 0x01, // Questions
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // Counts
            0x01, b'a', 0x00, // "a."
            0x00, 0x01, 0x00, 0x01, // A IN
        ];

        let response = build_response(&query, 3);

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[2], 0x81);
        assert_eq!(response[3] & 0x0f, 3);
        assert_eq!(response.len(), query.len());
    }
}

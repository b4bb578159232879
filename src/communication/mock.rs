//! Mock event transport for testing
//!
//! Records every event handed over for framing so tests can assert exactly
//! what would have gone on the wire.

use super::transport::{EventTransport, TransportError};

/// Maximum payload bytes a recorded event keeps
pub const MAX_PAYLOAD: usize = 16;

/// One recorded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEvent {
    pub class: u8,
    pub id: u8,
    pub payload: heapless::Vec<u8, MAX_PAYLOAD>,
}

/// Transport that records instead of transmitting
#[derive(Debug, Default)]
pub struct MockTransport {
    sent: heapless::Vec<SentEvent, 32>,
    fail: bool,
}

impl MockTransport {
    /// Create an empty mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far
    pub fn sent(&self) -> &[SentEvent] {
        &self.sent
    }

    /// Clear the record
    pub fn clear(&mut self) {
        self.sent.clear();
    }

    /// Make every subsequent send fail
    pub fn set_fail(&mut self, fail: bool) {
        self.fail = fail;
    }
}

impl EventTransport for MockTransport {
    async fn send_event(
        &mut self,
        class: u8,
        id: u8,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        if self.fail {
            return Err(TransportError::WriteFailed);
        }
        let _ = self.sent.push(SentEvent {
            class,
            id,
            payload: heapless::Vec::from_slice(payload).map_err(|_| TransportError::WriteFailed)?,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_records() {
        let mut transport = MockTransport::new();
        transport.send_event(0x03, 0x02, &[1, 2, 3]).await.unwrap();

        assert_eq!(transport.sent().len(), 1);
        assert_eq!(transport.sent()[0].class, 0x03);
        assert_eq!(transport.sent()[0].id, 0x02);
        assert_eq!(transport.sent()[0].payload.as_slice(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn test_mock_transport_fail() {
        let mut transport = MockTransport::new();
        transport.set_fail(true);

        assert_eq!(
            transport.send_event(0x03, 0x02, &[]).await,
            Err(TransportError::WriteFailed)
        );
        assert!(transport.sent().is_empty());
    }
}

//! Event transport seam
//!
//! The collaborator that frames and transmits event payloads over the
//! physical host link. This crate only hands over the semantic triplet
//! (class, id, payload); header layout, checksums, and link management are
//! the implementor's concern.

use core::fmt;

/// Transport error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum TransportError {
    /// The link rejected or failed the write
    WriteFailed,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::WriteFailed => write!(f, "event write failed"),
        }
    }
}

/// Framed event transmission
///
/// There is no retry or timeout at this level; a slow link simply stalls
/// the polling context until the write returns.
#[allow(async_fn_in_trait)]
pub trait EventTransport {
    /// Frame and transmit one event packet
    async fn send_event(&mut self, class: u8, id: u8, payload: &[u8])
        -> Result<(), TransportError>;
}

//! Host link
//!
//! Binary event encoding for the framed host protocol, the transport seam
//! the pipeline emits through, the observer/veto gate, and inbound mode
//! command parsing. Physical framing (packet type/class/id header,
//! checksums, link management) belongs to the transport collaborator, not
//! this crate.

pub mod command;
pub mod events;
pub mod observer;
pub mod protocol;
pub mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockTransport, SentEvent};

pub use command::{CommandError, ModeCommand};
pub use events::{encode_mode_change, encode_motion_data};
pub use observer::{EventAction, EventObserver, NullObserver};
pub use transport::{EventTransport, TransportError};

//! Data-ready interrupt latch
//!
//! The single piece of state shared across the interrupt boundary. The ISR
//! calls `raise` and returns; the polling context consumes the flag with
//! `take`. Atomic accesses keep both sides coherent without a critical
//! section on any target with atomic byte load/store/swap.

use core::sync::atomic::{AtomicBool, Ordering};

/// Latched data-ready flag
///
/// True exactly when a data-ready interrupt has fired since the last `take`.
/// An interrupt arriving while the consumer is mid-read re-raises the latch
/// and is processed on the next poll; it is never lost and never queues
/// deeper than one sample.
#[derive(Debug, Default)]
pub struct DataReadyLatch(AtomicBool);

impl DataReadyLatch {
    /// Create a lowered latch; `const` so it can back a `static` shared
    /// with the interrupt handler
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Raise the latch. The only operation allowed from interrupt context:
    /// O(1), no I/O, no blocking.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consume the latch, returning whether it was raised
    ///
    /// The swap makes take-then-read safe: one interrupt is consumed by
    /// exactly one poll.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    /// Peek without consuming
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

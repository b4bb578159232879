//! Data-ready edge wiring
//!
//! The sensor drives INT open-drain active-low; the board provides the
//! pull-up. A dedicated task awaits falling edges and raises the latch, so
//! the work done at interrupt priority is exactly one atomic store. The
//! mode controller arms and disarms the path through `GpioDataReadyLine`
//! without touching the GPIO itself.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_rp::gpio::Input;

use crate::devices::traits::DataReadyLine;
use crate::motion::DataReadyLatch;

/// Interrupt path control shared with [`data_ready_task`]
pub struct GpioDataReadyLine {
    armed: &'static AtomicBool,
}

impl GpioDataReadyLine {
    /// Create a line controller over the shared armed flag
    pub const fn new(armed: &'static AtomicBool) -> Self {
        Self { armed }
    }
}

impl DataReadyLine for GpioDataReadyLine {
    fn enable(&mut self) {
        self.armed.store(true, Ordering::Release);
    }

    fn disable(&mut self) {
        self.armed.store(false, Ordering::Release);
    }
}

/// Watch the INT pin and raise the latch on every falling edge
///
/// Edges arriving while the path is disarmed are dropped; the sensor is
/// asleep then and a stray level must not trigger a read.
#[embassy_executor::task]
pub async fn data_ready_task(
    mut int_pin: Input<'static>,
    armed: &'static AtomicBool,
    latch: &'static DataReadyLatch,
) {
    loop {
        int_pin.wait_for_falling_edge().await;
        if armed.load(Ordering::Acquire) {
            latch.raise();
        }
    }
}

//! No-op delay provider for host tests

use embedded_hal_async::delay::DelayNs;

/// Delay provider that returns immediately; settle delays are irrelevant
/// against mock hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

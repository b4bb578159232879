//! Platform isolation layer
//!
//! Hardware-specific code lives here so the acquisition pipeline and device
//! drivers stay platform-independent: drivers bind to the
//! `embedded_hal_async` bus traits, the pipeline binds to the device traits
//! in `crate::devices::traits`.

// RP2350 glue (feature-gated)
#[cfg(feature = "rp2350")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

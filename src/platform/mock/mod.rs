//! Mock platform implementations for host-side testing
//!
//! Mock bus collaborators implementing the `embedded_hal_async` traits the
//! MPU-6050 driver binds to. Available during test builds and when the
//! `mock` feature is enabled.

mod delay;
mod i2c;

pub use delay::NoopDelay;
pub use i2c::{I2cTransaction, MockI2c};

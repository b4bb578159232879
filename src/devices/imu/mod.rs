//! IMU Drivers
//!
//! ## Available Drivers
//!
//! - `Mpu6050Driver`: MPU-6050 6-axis IMU, the wearable's motion sensor
//! - `mock`: Mock sensor and interrupt line for host testing
//!
//! All drivers implement the `MotionSensor` trait and bind to
//! `embedded_hal_async::i2c::I2c`, so they are platform-agnostic.

pub mod mpu6050;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockDataReadyLine, MockMotionSensor};
pub use mpu6050::Mpu6050Driver;

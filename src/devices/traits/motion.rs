//! Motion Sensor Trait and Data Types
//!
//! Device-independent interface for 6-axis inertial sensors, consumed by the
//! acquisition pipeline.
//!
//! ## Usage
//!
//! ```ignore
//! use motionband::devices::traits::{MotionSample, MotionSensor};
//!
//! async fn drain<S: MotionSensor>(mut sensor: S) {
//!     let sample = sensor.read_motion6().await?;
//!     // sample.accel, sample.gyro
//! }
//! ```

use core::fmt;

use nalgebra::Vector3;

/// Three signed 16-bit axis values, exactly as the sensor registers hold them.
///
/// Used in two roles: raw (straight from hardware) and filtered (smoothed,
/// carried across iterations).
pub type Vector3i16 = Vector3<i16>;

/// Motion sensor error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum MotionError {
    /// I2C transaction failed
    Bus,

    /// Driver not initialized
    NotInitialized,

    /// WHO_AM_I readback did not match the expected device
    BadDevice,
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::Bus => write!(f, "bus transaction failed"),
            MotionError::NotInitialized => write!(f, "driver not initialized"),
            MotionError::BadDevice => write!(f, "unexpected device identity"),
        }
    }
}

/// One burst read of all six channels
///
/// Values are raw register counts; scaling to physical units is a consumer
/// concern and does not happen in this pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Linear acceleration, raw counts
    pub accel: Vector3i16,

    /// Rotational velocity, raw counts
    pub gyro: Vector3i16,
}

impl MotionSample {
    /// Sample with every axis zeroed
    pub fn zero() -> Self {
        Self {
            accel: Vector3i16::zeros(),
            gyro: Vector3i16::zeros(),
        }
    }
}

impl Default for MotionSample {
    fn default() -> Self {
        Self::zero()
    }
}

/// Device-independent 6-axis sensor interface
///
/// All six axes must come from a single burst transaction so the sample is
/// atomic relative to the sensor's internal registers.
#[allow(async_fn_in_trait)]
pub trait MotionSensor {
    /// One-time device bring-up: identity check, reset, rate/range/interrupt
    /// configuration. Best-effort; a settle delay is part of the sequence.
    async fn init(&mut self) -> Result<(), MotionError>;

    /// Enter or leave the sensor's low-power sleep mode
    async fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), MotionError>;

    /// Burst-read all six channels in fixed axis order (ax, ay, az, gx, gy, gz)
    async fn read_motion6(&mut self) -> Result<MotionSample, MotionError>;

    /// Sensor health status
    ///
    /// Returns false after consecutive bus errors.
    fn is_healthy(&self) -> bool;
}

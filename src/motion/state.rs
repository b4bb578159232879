//! Motion acquisition state
//!
//! The explicit context object owned by the pipeline: raw and filtered
//! vectors for both channels, plus the one-iteration shadows that serve as
//! filter memory. Nothing here is shared across the interrupt boundary.

use crate::devices::traits::{MotionSample, Vector3i16};

/// Raw, filtered, and shadow vectors for both channels
///
/// Invariants:
/// - `accel`/`gyro` are always one filter step behind the latest raw values
///   at the moment a read begins.
/// - `accel_prev`/`gyro_prev` hold the filtered values from the previous
///   filter application, never raw data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Raw linear acceleration
    pub accel_raw: Vector3i16,
    /// Filtered linear acceleration
    pub accel: Vector3i16,
    /// Last-iteration filtered linear acceleration
    pub accel_prev: Vector3i16,

    /// Raw rotational velocity
    pub gyro_raw: Vector3i16,
    /// Filtered rotational velocity
    pub gyro: Vector3i16,
    /// Last-iteration filtered rotational velocity
    pub gyro_prev: Vector3i16,
}

impl MotionState {
    /// All-zero state
    pub fn new() -> Self {
        Self {
            accel_raw: Vector3i16::zeros(),
            accel: Vector3i16::zeros(),
            accel_prev: Vector3i16::zeros(),
            gyro_raw: Vector3i16::zeros(),
            gyro: Vector3i16::zeros(),
            gyro_prev: Vector3i16::zeros(),
        }
    }

    /// Store a burst read into the raw vectors
    pub fn store_sample(&mut self, sample: &MotionSample) {
        self.accel_raw = sample.accel;
        self.gyro_raw = sample.gyro;
    }

    /// Zero the filtered vectors
    ///
    /// Run on Disabled→Enabled so a stale average never leaks into the
    /// first filter step of a new session. Raw and shadow vectors are left
    /// alone; both are overwritten before their next use.
    pub fn reset_filtered(&mut self) {
        self.accel = Vector3i16::zeros();
        self.gyro = Vector3i16::zeros();
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}

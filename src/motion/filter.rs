//! Per-axis exponential smoothing filter
//!
//! Single-pole exponential moving average applied independently to the
//! acceleration and angular-rate vectors:
//!
//! `filtered = filtered_prev + alpha * (raw - filtered_prev)`
//!
//! Causal, infinite impulse response, no lookahead. One prior filtered
//! sample per axis is the entire filter memory.

use crate::devices::traits::Vector3i16;
use crate::motion::state::MotionState;

/// Fixed blend factor for the wearable deployment
pub const SMOOTHING_ALPHA: f32 = 0.25;

/// Exponential moving average over both motion vectors
#[derive(Debug, Clone, Copy)]
pub struct SmoothingFilter {
    alpha: f32,
}

impl SmoothingFilter {
    /// Create a filter with the given blend factor, clamped to [0, 1]
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Blend factor in use
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// One filter step for a single vector
    ///
    /// Computed in f32; the result is converted back with `as i16`, which
    /// truncates toward zero and saturates at the i16 bounds. The truncation
    /// mode is a deliberate, documented choice: inputs are integer counts,
    /// so the sub-LSB difference against round-to-nearest is noise.
    fn step(&self, prev: Vector3i16, raw: Vector3i16) -> Vector3i16 {
        let prev = prev.map(|v| v as f32);
        let raw = raw.map(|v| v as f32);
        let blended = prev + (raw - prev) * self.alpha;
        blended.map(|v| v as i16)
    }

    /// Apply one filter step to both vectors in place
    ///
    /// The current filtered values are copied into the shadows first, so raw
    /// data never overwrites filter memory before it has been referenced.
    pub fn apply(&self, state: &mut MotionState) {
        state.accel_prev = state.accel;
        state.gyro_prev = state.gyro;

        state.accel = self.step(state.accel_prev, state.accel_raw);
        state.gyro = self.step(state.gyro_prev, state.gyro_raw);
    }
}

impl Default for SmoothingFilter {
    fn default() -> Self {
        Self::new(SMOOTHING_ALPHA)
    }
}

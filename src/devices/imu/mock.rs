//! Mock motion sensor and interrupt line for testing
//!
//! Configurable `MotionSensor` implementation for exercising the
//! acquisition pipeline without hardware.
//!
//! ## Usage
//!
//! ```ignore
//! use motionband::devices::imu::MockMotionSensor;
//! use motionband::devices::traits::{MotionSample, MotionSensor};
//!
//! let mut sensor = MockMotionSensor::with_samples(&[sample1, sample2]);
//! let sample = sensor.read_motion6().await?;
//! ```

use crate::devices::traits::{DataReadyLine, MotionError, MotionSample, MotionSensor};

/// Mock 6-axis sensor
///
/// Serves preset samples in sequence, then a default sample; records the
/// power state and init calls for verification.
pub struct MockMotionSensor {
    /// Queue of samples to return
    samples: heapless::Deque<MotionSample, 64>,

    /// Sample returned when the queue is empty
    default_sample: MotionSample,

    /// Health toggle (for exercising error paths)
    healthy: bool,

    /// Current sleep state, as last commanded
    sleeping: bool,

    /// Number of init calls
    init_count: u32,

    /// Number of burst reads served
    read_count: u32,
}

impl MockMotionSensor {
    /// Create a mock that always returns the zero sample
    pub fn new() -> Self {
        Self {
            samples: heapless::Deque::new(),
            default_sample: MotionSample::zero(),
            healthy: true,
            sleeping: true,
            init_count: 0,
            read_count: 0,
        }
    }

    /// Create a mock with a sequence of samples
    pub fn with_samples(samples: &[MotionSample]) -> Self {
        let mut mock = Self::new();
        for sample in samples.iter().take(64) {
            let _ = mock.samples.push_back(*sample);
        }
        mock
    }

    /// Set the sample returned when the queue is empty
    pub fn set_default_sample(&mut self, sample: MotionSample) {
        self.default_sample = sample;
    }

    /// Queue another sample
    pub fn push_sample(&mut self, sample: MotionSample) {
        let _ = self.samples.push_back(sample);
    }

    /// Toggle health (unhealthy reads fail with `MotionError::Bus`)
    pub fn set_healthy(&mut self, healthy: bool) {
        self.healthy = healthy;
    }

    /// Last commanded sleep state
    pub fn sleeping(&self) -> bool {
        self.sleeping
    }

    /// Number of init calls observed
    pub fn init_count(&self) -> u32 {
        self.init_count
    }

    /// Number of burst reads served
    pub fn read_count(&self) -> u32 {
        self.read_count
    }
}

impl Default for MockMotionSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSensor for MockMotionSensor {
    async fn init(&mut self) -> Result<(), MotionError> {
        if !self.healthy {
            return Err(MotionError::Bus);
        }
        self.init_count += 1;
        Ok(())
    }

    async fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), MotionError> {
        if !self.healthy {
            return Err(MotionError::Bus);
        }
        self.sleeping = enabled;
        Ok(())
    }

    async fn read_motion6(&mut self) -> Result<MotionSample, MotionError> {
        if !self.healthy {
            return Err(MotionError::Bus);
        }
        self.read_count += 1;
        Ok(self.samples.pop_front().unwrap_or(self.default_sample))
    }

    fn is_healthy(&self) -> bool {
        self.healthy
    }
}

/// Mock interrupt line that records attach/detach calls
#[derive(Debug, Default)]
pub struct MockDataReadyLine {
    /// Whether the line is currently enabled
    pub enabled: bool,

    /// Number of enable calls
    pub enable_count: u32,

    /// Number of disable calls
    pub disable_count: u32,
}

impl MockDataReadyLine {
    /// Create a detached mock line
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataReadyLine for MockDataReadyLine {
    fn enable(&mut self) {
        self.enabled = true;
        self.enable_count += 1;
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.disable_count += 1;
    }
}

//! Device traits
//!
//! Hardware-independent trait definitions consumed by the acquisition
//! pipeline. These traits enable unit testing with mock implementations and
//! sensor swaps without pipeline changes.

pub mod irq;
pub mod motion;

pub use irq::DataReadyLine;
pub use motion::{MotionError, MotionSample, MotionSensor, Vector3i16};

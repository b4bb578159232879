//! Data-ready interrupt line control
//!
//! The mode controller attaches and detaches the hardware interrupt path
//! through this seam; the platform decides what "attach" means (EXTI mask,
//! edge-watcher task arming, nothing at all in tests).

/// Control over the sensor's data-ready interrupt path
pub trait DataReadyLine {
    /// Start delivering data-ready edges to the latch
    fn enable(&mut self);

    /// Stop delivering data-ready edges
    fn disable(&mut self);
}

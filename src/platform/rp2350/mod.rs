//! RP2350 platform glue
//!
//! Embassy-based wiring between the MPU-6050 INT pin and the acquisition
//! pipeline: an edge-watcher task that raises the latch from interrupt
//! context, and the polling loop that drains it.

pub mod irq;
pub mod motion_loop;

pub use irq::{data_ready_task, GpioDataReadyLine};
pub use motion_loop::run_motion_loop;

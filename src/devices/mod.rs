//! Device drivers
//!
//! Hardware drivers bind to the `embedded_hal_async` bus traits so they stay
//! platform-independent; the acquisition pipeline consumes them through the
//! device-independent traits in `traits`.

pub mod imu;
pub mod traits;

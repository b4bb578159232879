//! MPU-6050 6-Axis IMU Driver
//!
//! I2C driver for the InvenSense MPU-6050 accelerometer + gyroscope. Only
//! raw sensor data is used; the on-chip DMP is not engaged.
//!
//! ## Features
//!
//! - 3-axis gyroscope: ±250, ±500, ±1000, ±2000 °/s
//! - 3-axis accelerometer: ±2, ±4, ±8, ±16 g
//! - Latched active-low data-ready interrupt on INT
//! - Single 14-byte burst read covering all six channels
//!
//! ## Usage
//!
//! ```ignore
//! use motionband::devices::imu::Mpu6050Driver;
//! use motionband::devices::traits::MotionSensor;
//!
//! let mut driver = Mpu6050Driver::new(i2c, delay, Mpu6050Config::default());
//! driver.init().await?;
//! let sample = driver.read_motion6().await?;
//! ```

mod config;
mod driver;
mod registers;

pub use config::{AccelRange, DlpfMode, GyroRange, Mpu6050Config};
pub use driver::Mpu6050Driver;

//! MPU-6050 Register Definitions
//!
//! Based on the MPU-6000/MPU-6050 Register Map (RM-MPU-6000A-00 v4.2).

#![allow(dead_code)]

// ============================================================================
// I2C Address
// ============================================================================

/// MPU-6050 I2C address when AD0 pin is low
pub const MPU6050_ADDR: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high
pub const MPU6050_ADDR_ALT: u8 = 0x69;

// ============================================================================
// Configuration Registers
// ============================================================================

/// Sample rate divider: SAMPLE_RATE = Gyro_Output_Rate / (1 + SMPLRT_DIV)
pub const SMPLRT_DIV: u8 = 0x19;

/// Configuration register (DLPF, FSYNC)
pub const CONFIG: u8 = 0x1A;

/// Gyroscope configuration (full-scale range, self-test)
pub const GYRO_CONFIG: u8 = 0x1B;

/// Accelerometer configuration (full-scale range, self-test)
pub const ACCEL_CONFIG: u8 = 0x1C;

/// Interrupt pin configuration
pub const INT_PIN_CFG: u8 = 0x37;

/// Interrupt enable
pub const INT_ENABLE: u8 = 0x38;

/// Interrupt status (read clears when INT_RD_CLEAR is set)
pub const INT_STATUS: u8 = 0x3A;

/// Power management 1 (reset, sleep, clock source)
pub const PWR_MGMT_1: u8 = 0x6B;

/// Power management 2 (standby per axis)
pub const PWR_MGMT_2: u8 = 0x6C;

/// Device identity
pub const WHO_AM_I: u8 = 0x75;

// ============================================================================
// Data Registers
// ============================================================================

/// First data register; a 14-byte burst from here covers accel (6),
/// die temperature (2), and gyro (6), each axis big-endian.
pub const ACCEL_XOUT_H: u8 = 0x3B;

/// Length of the accel + temp + gyro burst
pub const MOTION6_BURST_LEN: usize = 14;

// ============================================================================
// Register Values
// ============================================================================

/// WHO_AM_I value for the MPU-6050
pub const MPU6050_WHO_AM_I_VALUE: u8 = 0x68;

/// PWR_MGMT_1: device reset
pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0x80;

/// PWR_MGMT_1: sleep bit
pub const PWR_MGMT_1_SLEEP: u8 = 0x40;

/// PWR_MGMT_1: clock source = PLL with X-axis gyro reference
pub const PWR_MGMT_1_CLKSEL_PLL_XGYRO: u8 = 0x01;

/// GYRO_CONFIG FS_SEL values (bits 4:3)
pub const GYRO_FS_SEL_250DPS: u8 = 0x00;
pub const GYRO_FS_SEL_500DPS: u8 = 0x08;
pub const GYRO_FS_SEL_1000DPS: u8 = 0x10;
pub const GYRO_FS_SEL_2000DPS: u8 = 0x18;

/// ACCEL_CONFIG AFS_SEL values (bits 4:3)
pub const ACCEL_FS_SEL_2G: u8 = 0x00;
pub const ACCEL_FS_SEL_4G: u8 = 0x08;
pub const ACCEL_FS_SEL_8G: u8 = 0x10;
pub const ACCEL_FS_SEL_16G: u8 = 0x18;

/// CONFIG DLPF_CFG values (bits 2:0), named by gyro bandwidth
pub const DLPF_CFG_256HZ: u8 = 0x00;
pub const DLPF_CFG_188HZ: u8 = 0x01;
pub const DLPF_CFG_98HZ: u8 = 0x02;
pub const DLPF_CFG_42HZ: u8 = 0x03;
pub const DLPF_CFG_20HZ: u8 = 0x04;
pub const DLPF_CFG_10HZ: u8 = 0x05;
pub const DLPF_CFG_5HZ: u8 = 0x06;

/// INT_PIN_CFG: interrupt pin is active low
pub const INT_PIN_CFG_ACTIVE_LOW: u8 = 0x80;

/// INT_PIN_CFG: interrupt pin is open drain
pub const INT_PIN_CFG_OPEN_DRAIN: u8 = 0x40;

/// INT_PIN_CFG: interrupt level held until cleared
pub const INT_PIN_CFG_LATCH_INT_EN: u8 = 0x20;

/// INT_PIN_CFG: any register read clears the interrupt
pub const INT_PIN_CFG_INT_RD_CLEAR: u8 = 0x10;

/// INT_ENABLE: raise the interrupt on raw data ready
pub const INT_ENABLE_DATA_RDY: u8 = 0x01;

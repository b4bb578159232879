//! MPU-6050 Configuration
//!
//! Full-scale ranges, digital low-pass filter bandwidth, and output rate.
//! Defaults match the wearable deployment: 100 Hz output, ±2000 °/s gyro,
//! 42 Hz DLPF, latched active-low data-ready interrupt.

use super::registers;

/// Gyroscope full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250 °/s
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s (default, full hand-motion dynamics)
    #[default]
    Dps2000,
}

impl GyroRange {
    /// Get the GYRO_CONFIG value for this range
    pub fn register_value(self) -> u8 {
        match self {
            GyroRange::Dps250 => registers::GYRO_FS_SEL_250DPS,
            GyroRange::Dps500 => registers::GYRO_FS_SEL_500DPS,
            GyroRange::Dps1000 => registers::GYRO_FS_SEL_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_FS_SEL_2000DPS,
        }
    }
}

/// Accelerometer full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2 g (default)
    #[default]
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
    /// ±16 g
    G16,
}

impl AccelRange {
    /// Get the ACCEL_CONFIG value for this range
    pub fn register_value(self) -> u8 {
        match self {
            AccelRange::G2 => registers::ACCEL_FS_SEL_2G,
            AccelRange::G4 => registers::ACCEL_FS_SEL_4G,
            AccelRange::G8 => registers::ACCEL_FS_SEL_8G,
            AccelRange::G16 => registers::ACCEL_FS_SEL_16G,
        }
    }
}

/// Digital low pass filter bandwidth (named by gyro bandwidth)
///
/// Any setting other than `Bw256Hz` drops the gyro output rate from 8 kHz
/// to 1 kHz, which is what the sample rate divider divides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum DlpfMode {
    /// 256 Hz, filter effectively off
    Bw256Hz,
    /// 188 Hz
    Bw188Hz,
    /// 98 Hz
    Bw98Hz,
    /// 42 Hz (default, 1 kHz internal sampling)
    #[default]
    Bw42Hz,
    /// 20 Hz
    Bw20Hz,
    /// 10 Hz
    Bw10Hz,
    /// 5 Hz
    Bw5Hz,
}

impl DlpfMode {
    /// Get the CONFIG value for this bandwidth
    pub fn register_value(self) -> u8 {
        match self {
            DlpfMode::Bw256Hz => registers::DLPF_CFG_256HZ,
            DlpfMode::Bw188Hz => registers::DLPF_CFG_188HZ,
            DlpfMode::Bw98Hz => registers::DLPF_CFG_98HZ,
            DlpfMode::Bw42Hz => registers::DLPF_CFG_42HZ,
            DlpfMode::Bw20Hz => registers::DLPF_CFG_20HZ,
            DlpfMode::Bw10Hz => registers::DLPF_CFG_10HZ,
            DlpfMode::Bw5Hz => registers::DLPF_CFG_5HZ,
        }
    }
}

/// MPU-6050 driver configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct Mpu6050Config {
    /// I2C address (0x68 or 0x69 depending on AD0 pin)
    pub i2c_address: u8,

    /// Gyroscope full scale range
    pub gyro_range: GyroRange,

    /// Accelerometer full scale range
    pub accel_range: AccelRange,

    /// Digital low pass filter bandwidth
    pub dlpf: DlpfMode,

    /// Sample rate divider: OUTPUT_RATE = 1 kHz / (1 + sample_rate_div)
    pub sample_rate_div: u8,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            i2c_address: registers::MPU6050_ADDR,
            gyro_range: GyroRange::Dps2000,
            accel_range: AccelRange::G2,
            dlpf: DlpfMode::Bw42Hz,
            sample_rate_div: 9, // 1 kHz / (9 + 1) = 100 Hz
        }
    }
}

//! MPU-6050 I2C Driver Implementation

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use super::config::Mpu6050Config;
use super::registers;
use crate::devices::traits::{MotionError, MotionSample, MotionSensor, Vector3i16};

/// Maximum consecutive bus errors before marking the sensor unhealthy
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Data-ready interrupt pin behavior: active low, open drain, level held
/// until any register read clears it. The host side relies on exactly this
/// (pull-up input, falling-edge trigger).
const INT_PIN_BEHAVIOR: u8 = registers::INT_PIN_CFG_ACTIVE_LOW
    | registers::INT_PIN_CFG_OPEN_DRAIN
    | registers::INT_PIN_CFG_LATCH_INT_EN
    | registers::INT_PIN_CFG_INT_RD_CLEAR;

/// MPU-6050 I2C driver
///
/// Implements `MotionSensor` over any `embedded_hal_async` I2C bus. The
/// burst read keeps all six channels atomic relative to the sensor's
/// internal sample registers.
pub struct Mpu6050Driver<I2C, D> {
    /// I2C bus handle
    i2c: I2C,

    /// Delay provider for settle times during init
    delay: D,

    /// Driver configuration
    config: Mpu6050Config,

    /// Health status
    healthy: bool,

    /// Consecutive bus error count
    error_count: u32,

    /// Initialization complete flag
    initialized: bool,
}

impl<I2C: I2c, D: DelayNs> Mpu6050Driver<I2C, D> {
    /// Create a new driver; the device is untouched until `init`
    pub fn new(i2c: I2C, delay: D, config: Mpu6050Config) -> Self {
        Self {
            i2c,
            delay,
            config,
            healthy: false,
            error_count: 0,
            initialized: false,
        }
    }

    /// Read a single register
    async fn read_register(&mut self, reg: u8) -> Result<u8, MotionError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.config.i2c_address, &[reg], &mut buf)
            .await
            .map_err(|_| self.bus_error())?;
        self.error_count = 0;
        Ok(buf[0])
    }

    /// Write a single register
    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), MotionError> {
        self.i2c
            .write(self.config.i2c_address, &[reg, value])
            .await
            .map_err(|_| self.bus_error())?;
        self.error_count = 0;
        Ok(())
    }

    fn bus_error(&mut self) -> MotionError {
        self.error_count += 1;
        if self.error_count >= MAX_CONSECUTIVE_ERRORS {
            self.healthy = false;
        }
        MotionError::Bus
    }

    /// Burst-read accel + temp + gyro and decode the six axis words
    ///
    /// The die-temperature word sits between accel and gyro in the register
    /// file and is read but discarded.
    async fn read_motion_raw(&mut self) -> Result<([i16; 3], [i16; 3]), MotionError> {
        let mut buf = [0u8; registers::MOTION6_BURST_LEN];
        self.i2c
            .write_read(
                self.config.i2c_address,
                &[registers::ACCEL_XOUT_H],
                &mut buf,
            )
            .await
            .map_err(|_| self.bus_error())?;
        self.error_count = 0;

        // Registers are big-endian, high byte first
        let accel = [
            i16::from_be_bytes([buf[0], buf[1]]),
            i16::from_be_bytes([buf[2], buf[3]]),
            i16::from_be_bytes([buf[4], buf[5]]),
        ];
        let gyro = [
            i16::from_be_bytes([buf[8], buf[9]]),
            i16::from_be_bytes([buf[10], buf[11]]),
            i16::from_be_bytes([buf[12], buf[13]]),
        ];

        Ok((accel, gyro))
    }
}

impl<I2C: I2c, D: DelayNs> MotionSensor for Mpu6050Driver<I2C, D> {
    async fn init(&mut self) -> Result<(), MotionError> {
        // Identity check before touching configuration
        let whoami = self.read_register(registers::WHO_AM_I).await?;
        if whoami != registers::MPU6050_WHO_AM_I_VALUE {
            crate::log_error!("unexpected WHO_AM_I: {:#x} (expected 0x68)", whoami);
            return Err(MotionError::BadDevice);
        }

        // Reset, then wake with the gyro PLL as clock source
        self.write_register(registers::PWR_MGMT_1, registers::PWR_MGMT_1_DEVICE_RESET)
            .await?;
        self.delay.delay_ms(100).await;
        self.write_register(
            registers::PWR_MGMT_1,
            registers::PWR_MGMT_1_CLKSEL_PLL_XGYRO,
        )
        .await?;

        // Rate and range configuration
        self.write_register(registers::SMPLRT_DIV, self.config.sample_rate_div)
            .await?;
        self.write_register(registers::CONFIG, self.config.dlpf.register_value())
            .await?;
        self.write_register(
            registers::GYRO_CONFIG,
            self.config.gyro_range.register_value(),
        )
        .await?;
        self.write_register(
            registers::ACCEL_CONFIG,
            self.config.accel_range.register_value(),
        )
        .await?;

        // Data-ready interrupt: latched active-low on INT, cleared by any read
        self.write_register(registers::INT_PIN_CFG, INT_PIN_BEHAVIOR)
            .await?;
        self.write_register(registers::INT_ENABLE, registers::INT_ENABLE_DATA_RDY)
            .await?;

        // Best-effort settle; no confirmation readback
        self.delay.delay_ms(30).await;

        self.initialized = true;
        self.healthy = true;
        crate::log_info!("MPU-6050 initialized (WHO_AM_I {:#x})", whoami);

        Ok(())
    }

    async fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), MotionError> {
        if !self.initialized {
            return Err(MotionError::NotInitialized);
        }

        let current = self.read_register(registers::PWR_MGMT_1).await?;
        let value = if enabled {
            current | registers::PWR_MGMT_1_SLEEP
        } else {
            current & !registers::PWR_MGMT_1_SLEEP
        };
        self.write_register(registers::PWR_MGMT_1, value).await
    }

    async fn read_motion6(&mut self) -> Result<MotionSample, MotionError> {
        if !self.initialized {
            return Err(MotionError::NotInitialized);
        }

        let (accel, gyro) = self.read_motion_raw().await?;
        Ok(MotionSample {
            accel: Vector3i16::new(accel[0], accel[1], accel[2]),
            gyro: Vector3i16::new(gyro[0], gyro[1], gyro[2]),
        })
    }

    fn is_healthy(&self) -> bool {
        self.initialized && self.healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c, NoopDelay};

    fn driver_with(i2c: MockI2c) -> Mpu6050Driver<MockI2c, NoopDelay> {
        Mpu6050Driver::new(i2c, NoopDelay, Mpu6050Config::default())
    }

    async fn initialized_driver(mut i2c: MockI2c) -> Mpu6050Driver<MockI2c, NoopDelay> {
        i2c.set_read_data(&[0x68]);
        let mut driver = driver_with(i2c);
        driver.init().await.unwrap();
        driver
    }

    #[tokio::test]
    async fn test_init_register_sequence() {
        let driver = initialized_driver(MockI2c::new()).await;
        assert!(driver.is_healthy());

        let transactions = driver.i2c.transactions();
        // WHO_AM_I read, then reset/wake/rate/ranges/interrupt writes
        assert_eq!(
            transactions[0],
            I2cTransaction::WriteRead {
                addr: 0x68,
                write_data: heapless::Vec::from_slice(&[0x75]).unwrap(),
                read_len: 1,
            }
        );
        let writes: Vec<[u8; 2]> = transactions[1..]
            .iter()
            .map(|t| match t {
                I2cTransaction::Write { data, .. } => [data[0], data[1]],
                other => panic!("unexpected transaction {:?}", other),
            })
            .collect();
        assert_eq!(
            writes,
            vec![
                [0x6B, 0x80], // device reset
                [0x6B, 0x01], // wake, PLL X gyro clock
                [0x19, 0x09], // 100 Hz output
                [0x1A, 0x03], // 42 Hz DLPF
                [0x1B, 0x18], // ±2000 °/s
                [0x1C, 0x00], // ±2 g
                [0x37, 0xF0], // active-low, open-drain, latched, clear-on-read
                [0x38, 0x01], // data-ready interrupt
            ]
        );
    }

    #[tokio::test]
    async fn test_init_rejects_unknown_device() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0x71]); // an MPU-9250 answering instead
        let mut driver = driver_with(i2c);

        assert_eq!(driver.init().await, Err(MotionError::BadDevice));
        assert!(!driver.is_healthy());
    }

    #[tokio::test]
    async fn test_read_motion6_decodes_big_endian() {
        let mut driver = initialized_driver(MockI2c::new()).await;
        driver.i2c.clear_transactions();

        // ax=0x0102, ay=-1, az=0x0003, temp skipped, gx=-2, gy=0x7FFF, gz=0
        driver.i2c.set_read_data(&[
            0x01, 0x02, 0xFF, 0xFF, 0x00, 0x03, 0x0A, 0x0B, 0xFF, 0xFE, 0x7F, 0xFF, 0x00, 0x00,
        ]);
        let sample = driver.read_motion6().await.unwrap();

        assert_eq!(sample.accel, Vector3i16::new(0x0102, -1, 3));
        assert_eq!(sample.gyro, Vector3i16::new(-2, 0x7FFF, 0));
        assert_eq!(
            driver.i2c.transactions(),
            &[I2cTransaction::WriteRead {
                addr: 0x68,
                write_data: heapless::Vec::from_slice(&[0x3B]).unwrap(),
                read_len: 14,
            }]
        );
    }

    #[tokio::test]
    async fn test_read_before_init_fails() {
        let mut driver = driver_with(MockI2c::new());
        assert_eq!(
            driver.read_motion6().await,
            Err(MotionError::NotInitialized)
        );
    }

    #[tokio::test]
    async fn test_sleep_toggle_preserves_clock_bits() {
        let mut driver = initialized_driver(MockI2c::new()).await;
        driver.i2c.clear_transactions();

        driver.i2c.set_read_data(&[0x01]); // awake, PLL clock
        driver.set_sleep_enabled(true).await.unwrap();
        driver.i2c.set_read_data(&[0x41]); // asleep, PLL clock
        driver.set_sleep_enabled(false).await.unwrap();

        let writes: Vec<&I2cTransaction> = driver
            .i2c
            .transactions()
            .iter()
            .filter(|t| matches!(t, I2cTransaction::Write { .. }))
            .collect();
        assert_eq!(
            writes[0],
            &I2cTransaction::Write {
                addr: 0x68,
                data: heapless::Vec::from_slice(&[0x6B, 0x41]).unwrap(),
            }
        );
        assert_eq!(
            writes[1],
            &I2cTransaction::Write {
                addr: 0x68,
                data: heapless::Vec::from_slice(&[0x6B, 0x01]).unwrap(),
            }
        );
    }

    #[tokio::test]
    async fn test_consecutive_bus_errors_mark_unhealthy() {
        let mut driver = initialized_driver(MockI2c::new()).await;
        driver.i2c.set_fail(true);

        for _ in 0..MAX_CONSECUTIVE_ERRORS {
            assert_eq!(driver.read_motion6().await, Err(MotionError::Bus));
        }
        assert!(!driver.is_healthy());
    }
}

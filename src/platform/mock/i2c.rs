//! Mock I2C implementation for testing
//!
//! Records every bus transaction for test verification and serves
//! pre-programmed bytes to read operations.

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// Capacity limits for the transaction ledger
pub const MAX_TRANSACTIONS: usize = 32;
pub const MAX_WRITE_BYTES: usize = 8;
pub const READ_QUEUE: usize = 64;

/// I2C transaction record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write {
        addr: u8,
        data: heapless::Vec<u8, MAX_WRITE_BYTES>,
    },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Combined write-then-read transaction (register read)
    WriteRead {
        addr: u8,
        write_data: heapless::Vec<u8, MAX_WRITE_BYTES>,
        read_len: usize,
    },
}

/// Mock I2C bus
///
/// Read operations drain a byte queue loaded with `set_read_data`; unfilled
/// buffer bytes stay zero, which mirrors a bus read of an unprogrammed
/// register.
#[derive(Debug, Default)]
pub struct MockI2c {
    transactions: heapless::Vec<I2cTransaction, MAX_TRANSACTIONS>,
    read_data: heapless::Deque<u8, READ_QUEUE>,
    fail: bool,
}

/// Mock bus error, reported as a NACK-like failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockI2cError;

impl embedded_hal_async::i2c::Error for MockI2cError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl MockI2c {
    /// Create a new mock I2C bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the transaction log (for test verification)
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Clear the transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Queue bytes to be returned by subsequent read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        for &byte in data {
            let _ = self.read_data.push_back(byte);
        }
    }

    /// Make every subsequent transaction fail
    pub fn set_fail(&mut self, fail: bool) {
        self.fail = fail;
    }

    fn fill(&mut self, buffer: &mut [u8]) {
        for slot in buffer.iter_mut() {
            *slot = self.read_data.pop_front().unwrap_or(0);
        }
    }

    fn record(&mut self, transaction: I2cTransaction) {
        let _ = self.transactions.push(transaction);
    }
}

impl ErrorType for MockI2c {
    type Error = MockI2cError;
}

impl I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockI2cError);
        }

        match operations {
            [Operation::Write(data)] => {
                self.record(I2cTransaction::Write {
                    addr: address,
                    data: heapless::Vec::from_slice(data).unwrap_or_default(),
                });
            }
            [Operation::Write(data), Operation::Read(buffer)] => {
                self.record(I2cTransaction::WriteRead {
                    addr: address,
                    write_data: heapless::Vec::from_slice(data).unwrap_or_default(),
                    read_len: buffer.len(),
                });
                self.fill(buffer);
            }
            _ => {
                for operation in operations.iter_mut() {
                    match operation {
                        Operation::Write(data) => self.record(I2cTransaction::Write {
                            addr: address,
                            data: heapless::Vec::from_slice(data).unwrap_or_default(),
                        }),
                        Operation::Read(buffer) => {
                            self.record(I2cTransaction::Read {
                                addr: address,
                                len: buffer.len(),
                            });
                            self.fill(buffer);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_i2c_write() {
        let mut i2c = MockI2c::new();
        i2c.write(0x68, &[0x6B, 0x01]).await.unwrap();

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            I2cTransaction::Write {
                addr: 0x68,
                data: heapless::Vec::from_slice(&[0x6B, 0x01]).unwrap(),
            }
        );
    }

    #[tokio::test]
    async fn test_mock_i2c_write_read() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0x68]);

        let mut buffer = [0u8; 1];
        i2c.write_read(0x68, &[0x75], &mut buffer).await.unwrap();

        assert_eq!(buffer, [0x68]);
        assert_eq!(
            i2c.transactions()[0],
            I2cTransaction::WriteRead {
                addr: 0x68,
                write_data: heapless::Vec::from_slice(&[0x75]).unwrap(),
                read_len: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_mock_i2c_read_pads_with_zero() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0xAA]);

        let mut buffer = [0xFFu8; 3];
        i2c.read(0x68, &mut buffer).await.unwrap();

        assert_eq!(buffer, [0xAA, 0x00, 0x00]);
    }

    #[tokio::test]
    async fn test_mock_i2c_fail() {
        let mut i2c = MockI2c::new();
        i2c.set_fail(true);

        assert!(i2c.write(0x68, &[0x00]).await.is_err());
        assert!(i2c.transactions().is_empty());
    }
}

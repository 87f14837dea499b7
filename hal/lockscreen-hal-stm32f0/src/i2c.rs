//! I2C bus driver for STM32F0
//!
//! The panel is driven from a single task with blocking transfers, so the
//! wrapper is generic over the `embedded-hal` blocking I2C trait which
//! `embassy_stm32::i2c::I2c<'_, Blocking, Master>` implements.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use lockscreen_hal::I2cBus;

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (address or data byte not acknowledged)
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// Blocking I2C master implementing [`I2cBus`]
pub struct BlockingI2c<T> {
    inner: T,
}

impl<T: I2c> BlockingI2c<T> {
    /// Wrap an initialised I2C peripheral
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: I2c> I2cBus for BlockingI2c<T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}

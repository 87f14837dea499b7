//! I2C bus abstractions
//!
//! The display is the only device on the bus and is write-only, so the
//! trait only carries the write half of a master.

/// I2C bus master
///
/// Every call is one complete transaction: START, address byte, the
/// payload bytes (each acknowledged by the device), STOP. Implementations
/// block until the transaction has finished.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz), what SSD1306-class panels are usually run at
    pub const FAST: Self = Self { frequency: 400_000 };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingBus {
        writes: usize,
    }

    impl I2cBus for CountingBus {
        type Error = ();

        fn write(&mut self, _address: u8, _data: &[u8]) -> Result<(), ()> {
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_mut_ref_forwards_writes() {
        fn send<B: I2cBus>(mut bus: B) {
            let _ = bus.write(0x3C, &[0x00, 0xAF]);
            let _ = bus.write(0x3C, &[0x40, 0xFF]);
        }

        let mut bus = CountingBus { writes: 0 };
        send(&mut bus);
        send(&mut bus);
        assert_eq!(bus.writes, 4);
    }

    #[test]
    fn test_default_is_fast_mode() {
        assert_eq!(I2cConfig::default(), I2cConfig::FAST);
        assert_eq!(I2cConfig::STANDARD.frequency, 100_000);
    }
}

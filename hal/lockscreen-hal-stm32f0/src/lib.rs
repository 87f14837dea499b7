//! STM32F0-specific HAL for the lockscreen firmware
//!
//! Adapts `embassy-stm32` peripherals to the `lockscreen-hal` traits:
//!
//! - [`i2c::BlockingI2c`] wraps any `embedded-hal` 1.0 I2C master
//! - [`gpio::PullUpInput`] and [`gpio::PushPullOutput`] wrap embassy pins
//!
//! # Features
//!
//! - `stm32f042f6` / `stm32f042k6` - chip selection
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod gpio;
pub mod i2c;

pub use gpio::{PullUpInput, PushPullOutput};
pub use i2c::{BlockingI2c, I2cBusError};

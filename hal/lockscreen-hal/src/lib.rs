//! Lockscreen Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display core is written
//! against. Chip-specific crates (such as `lockscreen-hal-stm32f0`)
//! implement them, and host tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lockscreen-fw / lockscreen-core        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lockscreen-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ lockscreen-hal-     │
//!          │      stm32f0        │
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C bus operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cConfig};

//! Board-agnostic UI core for the lockscreen firmware
//!
//! This crate contains everything between the input pins and the display
//! bus that does not depend on a particular board:
//!
//! - Layered bit-grids and the pixel compositor
//! - 5x7 glyph rasterizer
//! - Button registry (borders, highlight fill, hit-testing)
//! - Cursor movement and input sampling
//! - Locked/Home screen state machine
//! - The per-tick controller tying it all together
//!
//! Drawing goes through [`lockscreen_display::DisplayBackend`], so the same
//! code drives the real panel and the recording backends used in tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod gfx;
pub mod input;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{Controller, TickReport};
pub use error::UiError;

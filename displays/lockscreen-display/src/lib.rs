//! Display layer for the lockscreen
//!
//! This crate provides:
//! - Panel geometry constants (`WIDTH`, `HEIGHT`, `PAGES`)
//! - `DisplayBackend`, the window/data interface the UI core pushes
//!   framebuffer bytes through
//! - `Panel`, an SSD1306-command-set OLED driver over any `I2cBus`
//!
//! # Memory layout
//!
//! The panel is page addressed: each page is a horizontal band of 8 rows,
//! and one byte holds one column of a page with the least significant bit
//! at the top. A framebuffer for the whole panel is therefore
//! `PAGES * WIDTH` bytes, indexed `page * WIDTH + x`.

#![no_std]

pub mod backend;
pub mod geometry;
pub mod panel;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use geometry::{HEIGHT, PAGES, WIDTH};
pub use panel::Panel;

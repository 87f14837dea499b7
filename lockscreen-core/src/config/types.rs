//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lockscreen_display::{HEIGHT, WIDTH};

/// Button height in pixels, border included
pub const BUTTON_HEIGHT: i32 = 12;

/// Maximum number of buttons on screen
pub const MAX_BUTTONS: usize = 10;

/// Maximum stored label length in bytes
pub const LABEL_CAPACITY: usize = 31;

/// Horizontal advance per character (5 glyph columns + 1 gap)
pub const GLYPH_ADVANCE: i32 = 6;

/// Glyph width in columns
pub const GLYPH_COLUMNS: usize = 5;

/// Shortest allowed tick interval
pub const MIN_TICK_MS: u32 = 10;

/// Default cursor speed; one pixel every 20 seconds
pub const DEFAULT_PIXELS_PER_SECOND: f32 = 0.05;

/// Default panel address
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// UI configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Cursor speed while a direction is held
    pub pixels_per_second: f32,
    /// 7-bit I2C address of the panel
    pub i2c_address: u8,
    /// Cursor position after boot
    pub cursor_start: (u8, u8),
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            pixels_per_second: DEFAULT_PIXELS_PER_SECOND,
            i2c_address: DEFAULT_I2C_ADDRESS,
            cursor_start: ((WIDTH / 2) as u8, (HEIGHT / 2) as u8),
        }
    }
}

impl UiConfig {
    /// Milliseconds between ticks
    ///
    /// `1000 / pixels_per_second`, never below [`MIN_TICK_MS`]. Zero,
    /// negative and NaN speeds fall back to the minimum.
    pub fn tick_interval_ms(&self) -> u32 {
        if self.pixels_per_second.is_nan() || self.pixels_per_second <= 0.0 {
            return MIN_TICK_MS;
        }

        let ms = 1000.0 / self.pixels_per_second;
        if ms < MIN_TICK_MS as f32 {
            MIN_TICK_MS
        } else {
            // Saturates for tiny speeds
            ms as u32
        }
    }

    /// Cursor start clamped onto the panel
    pub fn clamped_cursor_start(&self) -> (u8, u8) {
        let (x, y) = self.cursor_start;
        (
            x.min((WIDTH - 1) as u8),
            y.min((HEIGHT - 1) as u8),
        )
    }
}

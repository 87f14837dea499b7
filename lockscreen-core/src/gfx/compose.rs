//! Pixel compositing rule
//!
//! Pure functions only; the canvas applies the result and talks to the bus.

/// Pixel operation requested at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelOp {
    /// Draw the cursor
    On,
    /// Erase the cursor, restoring what lies underneath
    Off,
}

/// Layer bits at one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelSources {
    pub text: bool,
    pub chrome: bool,
    pub label: bool,
}

/// Resolve the framebuffer bit for `op`
///
/// `None` leaves the pixel untouched. Label pixels win over chrome, chrome
/// over static text, static text over background. A label pixel under the
/// cursor is never drawn over; an inverted cursor is drawn as a clear bit.
pub fn resolve(op: PixelOp, sources: PixelSources, inverted: bool) -> Option<bool> {
    match op {
        PixelOp::On if sources.label => None,
        PixelOp::On => Some(!inverted),
        PixelOp::Off if sources.label => Some(!inverted),
        PixelOp::Off => Some(sources.chrome || sources.text),
    }
}

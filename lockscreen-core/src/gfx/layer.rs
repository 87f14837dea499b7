//! Page-packed bit-grids

use lockscreen_display::geometry::{page_of, row_mask, FRAME_BYTES, HEIGHT, PAGES, WIDTH};

use super::compose::PixelSources;

/// One 128x64 bit-grid in panel RAM order
///
/// Byte `page * WIDTH + x` holds column `x` of `page`, least significant
/// bit at the top row.
#[derive(Clone)]
pub struct Layer {
    bytes: [u8; FRAME_BYTES],
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer {
    /// Create an all-clear layer
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; FRAME_BYTES],
        }
    }

    /// Raw bytes in panel order
    pub fn bytes(&self) -> &[u8; FRAME_BYTES] {
        &self.bytes
    }

    /// Clear every bit
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Read a pixel; out of bounds reads as clear
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.bytes[page_of(y) * WIDTH + x] & row_mask(y) != 0
    }

    /// Write a pixel
    ///
    /// Returns `false` (and does nothing) when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let byte = &mut self.bytes[page_of(y) * WIDTH + x];
        if on {
            *byte |= row_mask(y);
        } else {
            *byte &= !row_mask(y);
        }
        true
    }

    /// Page byte at column `x`
    pub fn byte(&self, x: usize, page: usize) -> u8 {
        if x >= WIDTH || page >= PAGES {
            return 0;
        }
        self.bytes[page * WIDTH + x]
    }

    /// OR `bits` into the page byte at column `x`
    pub fn merge(&mut self, x: usize, page: usize, bits: u8) {
        if x < WIDTH && page < PAGES {
            self.bytes[page * WIDTH + x] |= bits;
        }
    }

    /// Contiguous run of page bytes for columns `start..=end`
    ///
    /// Empty when the run is reversed or leaves the panel.
    pub fn row(&self, page: usize, start: usize, end: usize) -> &[u8] {
        if page >= PAGES || start > end || end >= WIDTH {
            return &[];
        }
        let base = page * WIDTH;
        &self.bytes[base + start..=base + end]
    }
}

/// The three logical layers plus the composited framebuffer
#[derive(Clone, Default)]
pub struct Layers {
    /// Every rendered glyph, static text and button labels alike
    pub text: Layer,
    /// Button borders and filled interiors
    pub chrome: Layer,
    /// Glyph pixels belonging to button labels
    pub label_invert: Layer,
    /// What the panel shows
    pub framebuffer: Layer,
}

impl Layers {
    pub const fn new() -> Self {
        Self {
            text: Layer::new(),
            chrome: Layer::new(),
            label_invert: Layer::new(),
            framebuffer: Layer::new(),
        }
    }

    /// Clear all four grids
    pub fn clear(&mut self) {
        self.text.clear();
        self.chrome.clear();
        self.label_invert.clear();
        self.framebuffer.clear();
    }

    /// Layer bits feeding the compositor at `(x, y)`
    pub fn sources(&self, x: usize, y: usize) -> PixelSources {
        PixelSources {
            text: self.text.get(x, y),
            chrome: self.chrome.get(x, y),
            label: self.label_invert.get(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_mapping_is_lsb_top() {
        let mut layer = Layer::new();

        assert!(layer.set(5, 0, true));
        assert!(layer.set(5, 7, true));
        assert!(layer.set(5, 8, true));

        assert_eq!(layer.byte(5, 0), 0b1000_0001);
        assert_eq!(layer.byte(5, 1), 0b0000_0001);
        assert_eq!(layer.bytes()[WIDTH + 5], 0x01);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut layer = Layer::new();

        assert!(!layer.set(WIDTH, 0, true));
        assert!(!layer.set(0, HEIGHT, true));
        assert!(!layer.get(WIDTH, 0));
        assert_eq!(layer.byte(0, PAGES), 0);
        assert!(layer.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_pixel_keeps_neighbours() {
        let mut layer = Layer::new();
        layer.merge(10, 3, 0xFF);
        layer.set(10, 26, false);

        assert_eq!(layer.byte(10, 3), 0b1111_1011);
        assert!(layer.get(10, 25));
        assert!(!layer.get(10, 26));
    }

    #[test]
    fn test_row_slice() {
        let mut layer = Layer::new();
        layer.merge(3, 7, 0x11);
        layer.merge(4, 7, 0x22);

        assert_eq!(layer.row(7, 3, 4), &[0x11, 0x22]);
    }

    #[test]
    fn test_row_out_of_range_is_empty() {
        let layer = Layer::new();
        assert!(layer.row(7, 4, 3).is_empty());
        assert!(layer.row(8, 0, 3).is_empty());
        assert!(layer.row(0, 0, 128).is_empty());
        assert!(layer.row(usize::MAX, usize::MAX, usize::MAX).is_empty());
        assert_eq!(layer.row(7, 0, 127).len(), 128);
    }

    #[test]
    fn test_sources() {
        let mut layers = Layers::new();
        layers.chrome.set(1, 1, true);
        layers.text.set(1, 1, true);

        let s = layers.sources(1, 1);
        assert!(s.text && s.chrome && !s.label);

        layers.clear();
        assert_eq!(layers.sources(1, 1), PixelSources::default());
    }
}

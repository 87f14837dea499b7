//! Framebuffer owner and bus pusher

use heapless::Vec;
use lockscreen_display::geometry::{page_of, FRAME_BYTES, LAST_COLUMN, LAST_PAGE, PAGES, WIDTH};
use lockscreen_display::{DisplayBackend, DisplayError};

use super::compose::{resolve, PixelOp};
use super::glyph::glyph_for;
use super::layer::Layers;
use crate::config::GLYPH_ADVANCE;

/// How rendered text is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextMode {
    /// Free-standing text
    Static,
    /// Label inside a button; also marked in the label mask
    ButtonLabel,
}

/// Layers plus the display they are mirrored to
///
/// Memory is always updated; a failed bus write is counted and the
/// operation carries on with the remaining cells.
pub struct Canvas<D> {
    backend: D,
    layers: Layers,
    bus_errors: u16,
    last_error: Option<DisplayError>,
}

impl<D: DisplayBackend> Canvas<D> {
    pub fn new(backend: D) -> Self {
        Self {
            backend,
            layers: Layers::new(),
            bus_errors: 0,
            last_error: None,
        }
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut Layers {
        &mut self.layers
    }

    pub fn backend(&self) -> &D {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut D {
        &mut self.backend
    }

    /// Bus failures since the last call
    pub fn take_bus_errors(&mut self) -> u16 {
        core::mem::take(&mut self.bus_errors)
    }

    /// Most recent bus failure, if any
    pub fn last_error(&self) -> Option<DisplayError> {
        self.last_error
    }

    /// Blank every layer and stream a zero frame to the panel
    pub fn clear(&mut self) {
        self.layers.clear();
        let result = self.backend.write_window(
            0..=LAST_COLUMN,
            0..=LAST_PAGE,
            &self.layers.framebuffer.bytes()[..FRAME_BYTES],
        );
        self.record(result);
    }

    /// Apply a cursor pixel operation
    ///
    /// Returns `true` when the framebuffer was written (and pushed).
    pub fn pixel(&mut self, x: i32, y: i32, op: PixelOp, inverted: bool) -> bool {
        if !lockscreen_display::geometry::in_bounds(x, y) {
            return false;
        }
        let (x, y) = (x as usize, y as usize);

        let Some(on) = resolve(op, self.layers.sources(x, y), inverted) else {
            return false;
        };
        self.layers.framebuffer.set(x, y, on);
        self.push_cell(x as i32, page_of(y) as i32);
        true
    }

    /// Render `text` with its top-left glyph column at `(x, page)`
    ///
    /// Each byte maps to one glyph; columns off the panel are skipped and
    /// every drawn column is pushed on its own.
    pub fn draw_text(&mut self, text: &str, x: i32, page: i32, mode: TextMode) {
        if !(0..PAGES as i32).contains(&page) {
            return;
        }
        let page_idx = page as usize;

        let mut origin = x;
        for c in text.bytes() {
            if origin >= WIDTH as i32 {
                break;
            }
            for (col, &bits) in glyph_for(c).iter().enumerate() {
                let column = origin + col as i32;
                if !(0..WIDTH as i32).contains(&column) {
                    continue;
                }
                let column_idx = column as usize;

                self.layers.text.merge(column_idx, page_idx, bits);
                self.layers.framebuffer.merge(column_idx, page_idx, bits);
                if mode == TextMode::ButtonLabel {
                    self.layers.label_invert.merge(column_idx, page_idx, bits);
                }
                self.push_cell(column, page);
            }
            origin = origin.saturating_add(GLYPH_ADVANCE);
        }
    }

    /// Push one framebuffer byte; off-panel cells are ignored
    pub fn push_cell(&mut self, x: i32, page: i32) {
        if !(0..WIDTH as i32).contains(&x) || !(0..PAGES as i32).contains(&page) {
            return;
        }
        let data = [self.layers.framebuffer.byte(x as usize, page as usize)];
        let result = self
            .backend
            .write_window(x as u8..=x as u8, page as u8..=page as u8, &data);
        self.record(result);
    }

    /// Push columns `start..=end` of one page in a single burst
    pub fn push_row(&mut self, page: usize, start: usize, end: usize) {
        if page >= PAGES || start > end || end >= WIDTH {
            return;
        }
        let result = self.backend.write_window(
            start as u8..=end as u8,
            page as u8..=page as u8,
            self.layers.framebuffer.row(page, start, end),
        );
        self.record(result);
    }

    /// Push one column across pages `first..=last` in a single burst
    pub fn push_column(&mut self, x: usize, first: usize, last: usize) {
        if x >= WIDTH || first > last || last >= PAGES {
            return;
        }
        let mut data: Vec<u8, PAGES> = Vec::new();
        for page in first..=last {
            // At most PAGES entries
            let _ = data.push(self.layers.framebuffer.byte(x, page));
        }
        let result = self
            .backend
            .write_window(x as u8..=x as u8, first as u8..=last as u8, &data);
        self.record(result);
    }

    fn record(&mut self, result: Result<(), DisplayError>) {
        if let Err(e) = result {
            self.bus_errors = self.bus_errors.saturating_add(1);
            self.last_error = Some(e);
        }
    }
}

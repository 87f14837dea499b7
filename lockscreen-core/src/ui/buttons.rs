//! Button registry
//!
//! Buttons are labelled rectangles with a one-pixel border. Hovering the
//! cursor over one fills its interior, turning the label light on dark.
//! Buttons are only ever created or bulk-cleared.

use heapless::{String, Vec};
use lockscreen_display::geometry::{page_of, HEIGHT, WIDTH};
use lockscreen_display::DisplayBackend;

use crate::config::{BUTTON_HEIGHT, GLYPH_ADVANCE, GLYPH_COLUMNS, LABEL_CAPACITY, MAX_BUTTONS};
use crate::error::UiError;
use crate::gfx::{Canvas, TextMode};

/// Gap between the border and the label, in pixels
const LABEL_PADDING: i32 = 4;

/// One registered button
///
/// Geometry is stored as requested, before clamping to the panel, and is
/// what hit-testing uses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub label: String<LABEL_CAPACITY>,
    pub filled: bool,
    /// Page the label is rendered on
    pub page: i32,
}

impl Button {
    /// Whether `(x, y)` lies inside the box, border included
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (x0, y0) = (i64::from(self.x), i64::from(self.y));
        (x0..x0 + i64::from(self.width)).contains(&x)
            && (y0..y0 + i64::from(BUTTON_HEIGHT)).contains(&y)
    }

    /// Unclamped ring edges as `(left, top, right, bottom)`, inclusive
    fn edges(&self) -> (i32, i32, i32, i32) {
        (
            self.x,
            self.y,
            self.x.saturating_add(self.width - 1),
            self.y.saturating_add(BUTTON_HEIGHT - 1),
        )
    }

    /// Box clamped to the panel as `(x0, y0, x1, y1)`, inclusive
    ///
    /// `None` when nothing of it is visible.
    fn visible_box(&self) -> Option<(i32, i32, i32, i32)> {
        let (left, top, right, bottom) = self.edges();
        clamp_box(left, top, right, bottom)
    }

    /// Inside of the ring, clamped to the panel
    ///
    /// Taken from the unclamped edges, so an off-panel edge never turns a
    /// label row into ring.
    fn visible_interior(&self) -> Option<(i32, i32, i32, i32)> {
        let (left, top, right, bottom) = self.edges();
        clamp_box(
            left.saturating_add(1),
            top.saturating_add(1),
            right.saturating_sub(1),
            bottom.saturating_sub(1),
        )
    }
}

fn clamp_box(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i32, i32, i32, i32)> {
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(WIDTH as i32 - 1);
    let y1 = y1.min(HEIGHT as i32 - 1);
    (x0 <= x1 && y0 <= y1).then_some((x0, y0, x1, y1))
}

/// Longest prefix of `text` that fits a label, cut on a char boundary
fn truncate_label(text: &str) -> String<LABEL_CAPACITY> {
    let mut end = text.len().min(LABEL_CAPACITY);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut label = String::new();
    // Fits by construction
    let _ = label.push_str(&text[..end]);
    label
}

/// Fixed-capacity button store
#[derive(Debug, Default)]
pub struct ButtonRegistry {
    buttons: Vec<Button, MAX_BUTTONS>,
}

impl ButtonRegistry {
    pub const fn new() -> Self {
        Self {
            buttons: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    /// Register and draw a button around `text` rendered at `(x, page)`
    ///
    /// The box starts 4 pixels left of the text and 2 pixels above the
    /// page, and is `len * 6 + 8` wide.
    pub fn create_button<D: DisplayBackend>(
        &mut self,
        canvas: &mut Canvas<D>,
        text: &str,
        x: i32,
        page: i32,
    ) -> Result<usize, UiError> {
        if self.buttons.is_full() {
            return Err(UiError::RegistryFull);
        }

        let label = truncate_label(text);
        let index = self.buttons.len();
        let button = Button {
            index,
            x: x.saturating_sub(LABEL_PADDING),
            y: page.saturating_mul(8).saturating_sub(2),
            width: label.len() as i32 * GLYPH_ADVANCE + 2 * LABEL_PADDING,
            label,
            filled: false,
            page,
        };

        draw_border(canvas, &button);
        canvas.draw_text(&button.label, x, page, TextMode::ButtonLabel);

        self.buttons
            .push(button)
            .map_err(|_| UiError::RegistryFull)?;
        Ok(index)
    }

    /// Fill or unfill a button's interior
    ///
    /// Filling darkens the interior and cuts the label out of it; unfilling
    /// puts back whatever text lies underneath. Unknown indices are ignored.
    pub fn set_filled<D: DisplayBackend>(&mut self, canvas: &mut Canvas<D>, index: usize, fill: bool) {
        let Some(button) = self.buttons.get_mut(index) else {
            return;
        };
        button.filled = fill;

        if let Some((x0, y0, x1, y1)) = button.visible_interior() {
            let layers = canvas.layers_mut();
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let (ux, uy) = (x as usize, y as usize);
                    layers.chrome.set(ux, uy, fill);

                    let on = if fill {
                        !layers.label_invert.get(ux, uy)
                    } else {
                        layers.text.get(ux, uy)
                    };
                    layers.framebuffer.set(ux, uy, on);
                }
            }

            for page in page_of(y0 as usize)..=page_of(y1 as usize) {
                canvas.push_row(page, x0 as usize, x1 as usize);
            }
        }

        let mut origin = button.x.saturating_add(LABEL_PADDING);
        for _ in 0..button.label.len() {
            if origin >= WIDTH as i32 {
                break;
            }
            for col in 0..GLYPH_COLUMNS as i32 {
                canvas.push_cell(origin + col, button.page);
            }
            origin = origin.saturating_add(GLYPH_ADVANCE);
        }
    }

    /// Lowest-index button containing `(x, y)`
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons.iter().position(|b| b.contains(x, y))
    }

    /// Forget every button; the drawing is left to the caller
    pub fn clear(&mut self) {
        self.buttons.clear();
    }
}

/// Draw the one-pixel ring of a new button into chrome and framebuffer
///
/// Only edges that land on the panel are drawn; a box hanging off the
/// panel is left open on that side.
fn draw_border<D: DisplayBackend>(canvas: &mut Canvas<D>, button: &Button) {
    let Some((x0, y0, x1, y1)) = button.visible_box() else {
        return;
    };
    let (left, top, right, bottom) = button.edges();

    let layers = canvas.layers_mut();
    for y in y0..=y1 {
        for x in x0..=x1 {
            if y == top || y == bottom || x == left || x == right {
                layers.chrome.set(x as usize, y as usize, true);
                layers.framebuffer.set(x as usize, y as usize, true);
            }
        }
    }

    let (first, last) = (page_of(y0 as usize), page_of(y1 as usize));
    if top == y0 {
        canvas.push_row(first, x0 as usize, x1 as usize);
    }
    if bottom == y1 {
        canvas.push_row(last, x0 as usize, x1 as usize);
    }
    if left == x0 {
        canvas.push_column(x0 as usize, first, last);
    }
    if right == x1 {
        canvas.push_column(x1 as usize, first, last);
    }
}

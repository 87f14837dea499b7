//! Cursor/screen controller
//!
//! Owns the canvas, the buttons, the cursor and the current screen, and
//! runs one update per tick. The caller sleeps for
//! [`TickReport::next_tick_ms`] and ticks again; there is no other timer.

use lockscreen_display::DisplayBackend;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::gfx::{Canvas, PixelOp, TextMode};
use crate::input::{Edge, InputLevels};
use crate::state::{Effect, Event, Screen};
use crate::ui::{ButtonRegistry, Cursor};

/// Lock screen prompt, one line per page
const PROMPT: [(&str, i32, i32); 2] = [("press unlock to", 1, 1), ("start the os", 1, 2)];

/// Unlock button label and placement
const UNLOCK_BUTTON: (&str, i32, i32) = ("unlock", 7, 6);

/// Home screen text and placement
const LOADING: (&str, i32, i32) = ("loading...", 35, 3);

/// Index the unlock button always gets
const UNLOCK_INDEX: usize = 0;

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Re-arm the tick after this many milliseconds
    pub next_tick_ms: u32,
    /// Screen after the tick
    pub screen: Screen,
    /// Cursor position after the tick
    pub cursor: (u8, u8),
    /// Whether the cursor moved
    pub moved: bool,
    /// Whether this tick unlocked
    pub unlocked: bool,
    /// Highlighted button, if it changed this tick
    pub highlight_changed: Option<Option<usize>>,
    /// Display writes that failed during the tick
    pub bus_errors: u16,
}

/// UI controller
pub struct Controller<D> {
    canvas: Canvas<D>,
    buttons: ButtonRegistry,
    cursor: Cursor,
    screen: Screen,
    activate: Edge,
    config: UiConfig,
}

impl<D: DisplayBackend> Controller<D> {
    /// Create a controller; nothing is drawn until [`Controller::boot`]
    pub fn new(backend: D, config: UiConfig) -> Self {
        let (x, y) = config.clamped_cursor_start();
        Self {
            canvas: Canvas::new(backend),
            buttons: ButtonRegistry::new(),
            cursor: Cursor::new(x, y),
            screen: Screen::Locked,
            activate: Edge::new(),
            config,
        }
    }

    /// Draw the lock screen
    pub fn boot(&mut self) -> Result<TickReport, UiError> {
        self.canvas.clear();
        self.buttons.clear();

        for (text, x, page) in PROMPT {
            self.canvas.draw_text(text, x, page, TextMode::Static);
        }
        let (label, x, page) = UNLOCK_BUTTON;
        self.buttons.create_button(&mut self.canvas, label, x, page)?;

        self.draw_cursor();
        Ok(self.report(false, false, None))
    }

    /// Run one update from sampled input levels
    pub fn tick(&mut self, levels: InputLevels) -> TickReport {
        if self.activate.is_fresh(levels.activate)
            && self.screen == Screen::Locked
            && self.hit_test_cursor() == Some(UNLOCK_INDEX)
        {
            self.apply(Event::UnlockRequested);
            self.activate.record(true);
            return self.report(false, true, None);
        }
        self.activate.record(levels.activate);

        let Some((old_x, old_y)) = self.cursor.step(&levels) else {
            return self.report(false, false, None);
        };

        self.canvas
            .pixel(old_x as i32, old_y as i32, PixelOp::Off, self.cursor.inverted);

        let (from, to) = if self.screen.is_interactive() {
            (
                self.buttons.hit_test(old_x as i32, old_y as i32),
                self.hit_test_cursor(),
            )
        } else {
            (None, None)
        };
        self.apply(Event::CursorMoved { from, to });

        let changed = (from != to).then_some(to);
        self.report(true, false, changed)
    }

    fn apply(&mut self, event: Event) {
        let transition = self.screen.transition(event);
        self.screen = transition.next;

        for effect in transition.effects {
            match effect {
                Effect::ClearAll => {
                    self.canvas.clear();
                    self.buttons.clear();
                }
                Effect::DrawLoadingMessage => {
                    let (text, x, page) = LOADING;
                    self.canvas.draw_text(text, x, page, TextMode::Static);
                }
                Effect::SetInverted(inverted) => self.cursor.inverted = inverted,
                Effect::Unfill(index) => self.buttons.set_filled(&mut self.canvas, index, false),
                Effect::Fill(index) => self.buttons.set_filled(&mut self.canvas, index, true),
                Effect::RedrawCursor => self.draw_cursor(),
            }
        }
    }

    fn draw_cursor(&mut self) {
        self.canvas.pixel(
            self.cursor.x as i32,
            self.cursor.y as i32,
            PixelOp::On,
            self.cursor.inverted,
        );
    }

    fn hit_test_cursor(&self) -> Option<usize> {
        self.buttons
            .hit_test(self.cursor.x as i32, self.cursor.y as i32)
    }

    fn report(
        &mut self,
        moved: bool,
        unlocked: bool,
        highlight_changed: Option<Option<usize>>,
    ) -> TickReport {
        TickReport {
            next_tick_ms: self.config.tick_interval_ms(),
            screen: self.screen,
            cursor: (self.cursor.x, self.cursor.y),
            moved,
            unlocked,
            highlight_changed,
            bus_errors: self.canvas.take_bus_errors(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn buttons(&self) -> &ButtonRegistry {
        &self.buttons
    }

    pub fn canvas(&self) -> &Canvas<D> {
        &self.canvas
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Mutable access to the display for panel settings
    pub fn backend_mut(&mut self) -> &mut D {
        self.canvas.backend_mut()
    }
}

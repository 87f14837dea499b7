//! Test doubles shared by the unit tests

use std::vec::Vec;

use lockscreen_display::geometry::{FRAME_BYTES, WIDTH};
use lockscreen_display::{DisplayBackend, DisplayError};
use lockscreen_hal::InputPin;

use crate::gfx::Layers;

/// One data burst together with the window it landed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub columns: (u8, u8),
    pub pages: (u8, u8),
    pub data: Vec<u8>,
}

/// Backend that logs every burst and emulates panel RAM
pub struct RecordingBackend {
    transfers: Vec<Transfer>,
    columns: (u8, u8),
    pages: (u8, u8),
    cursor: (u8, u8),
    ram: [u8; FRAME_BYTES],
    pub fail: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
            columns: (0, 127),
            pages: (0, 7),
            cursor: (0, 0),
            ram: [0; FRAME_BYTES],
            fail: false,
        }
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Forget logged transfers; panel RAM is kept
    pub fn reset(&mut self) {
        self.transfers.clear();
    }

    /// Whether the emulated panel shows exactly the framebuffer
    pub fn mirrors(&self, layers: &Layers) -> bool {
        self.ram[..] == layers.framebuffer.bytes()[..]
    }
}

impl DisplayBackend for RecordingBackend {
    fn set_column_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        self.columns = (start, end);
        self.cursor = (start, self.pages.0);
        Ok(())
    }

    fn set_page_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        self.pages = (start, end);
        self.cursor = (self.columns.0, start);
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        for &byte in data {
            let (x, page) = self.cursor;
            self.ram[page as usize * WIDTH + x as usize] = byte;

            // Horizontal addressing: wrap to the next page at the window edge
            self.cursor = if x >= self.columns.1 {
                let next = if page >= self.pages.1 { self.pages.0 } else { page + 1 };
                (self.columns.0, next)
            } else {
                (x + 1, page)
            };
        }
        self.transfers.push(Transfer {
            columns: self.columns,
            pages: self.pages,
            data: data.to_vec(),
        });
        Ok(())
    }
}

/// Input line with a settable level
pub struct FakePin {
    pub high: core::cell::Cell<bool>,
}

impl FakePin {
    /// Idle line (pulled up, not pressed)
    pub fn released() -> Self {
        Self {
            high: core::cell::Cell::new(true),
        }
    }

    pub fn press(&self) {
        self.high.set(false);
    }

    pub fn release(&self) {
        self.high.set(true);
    }
}

impl InputPin for FakePin {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}

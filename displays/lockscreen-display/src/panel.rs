//! I2C OLED panel driver
//!
//! Driver for 128x64 OLED controllers speaking the SSD1306 command set
//! (the SH1107 module in the lock screen build is strapped the same way).
//! Unlike a whole-frame driver, it keeps no framebuffer of its own: the UI
//! core owns the pixels and pushes only the cells it touched through the
//! [`DisplayBackend`] window interface.

use heapless::Vec;
use lockscreen_hal::I2cBus;

use crate::backend::{DisplayBackend, DisplayError};
use crate::geometry::{LAST_COLUMN, LAST_PAGE, WIDTH};

/// Default I2C address (typically 0x3C or 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a command stream
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing display RAM data
const CONTROL_DATA: u8 = 0x40;

/// Most commands carried by one command transaction
const MAX_BATCH: usize = 4;

/// Data bytes per transaction; longer bursts are split
const MAX_CHUNK: usize = WIDTH;

/// Panel commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-on contrast
const DEFAULT_CONTRAST: u8 = 0x7F;

/// Initialization sequence, one command transaction per group
const INIT_SEQUENCE: &[&[u8]] = &[
    &[cmd::DISPLAY_OFF, cmd::SET_CLOCK_DIV, 0x80, cmd::SET_MUX_RATIO],
    &[0x3F, cmd::SET_DISPLAY_OFFSET, 0x00, cmd::SET_START_LINE],
    &[cmd::SET_CHARGE_PUMP, 0x14, cmd::SET_MEMORY_MODE, 0x00], // horizontal addressing
    &[cmd::SET_SEG_REMAP, cmd::SET_COM_SCAN_DEC, cmd::SET_COM_PINS, 0x12],
    &[cmd::SET_CONTRAST, DEFAULT_CONTRAST, cmd::SET_PRECHARGE, 0xF1],
    &[cmd::SET_VCOM_DETECT, 0x40, cmd::RESUME_RAM, cmd::SET_NORMAL],
    &[cmd::DISPLAY_ON],
];

/// Any bus failure surfaces as [`DisplayError::Communication`]
///
/// The bus error type is chip specific; the panel only reports that the
/// transfer did not happen.
fn bus_error<E>(_: E) -> DisplayError {
    DisplayError::Communication
}

/// OLED panel on an I2C bus
pub struct Panel<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
    display_on: bool,
    contrast: u8,
    inverted: bool,
}

impl<I2C: I2cBus> Panel<I2C> {
    /// Create a new driver; nothing is sent until [`Panel::init`]
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialized: false,
            display_on: false,
            contrast: DEFAULT_CONTRAST,
            inverted: false,
        }
    }

    /// Run the power-on sequence and switch the panel on
    pub fn init(&mut self) -> Result<(), DisplayError> {
        for group in INIT_SEQUENCE {
            self.commands(group)?;
        }

        self.initialized = true;
        self.display_on = true;
        self.contrast = DEFAULT_CONTRAST;
        self.inverted = false;
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.commands(&[cmd::SET_CONTRAST, contrast])?;
        self.contrast = contrast;
        Ok(())
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.commands(&[if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF }])?;
        self.display_on = on;
        Ok(())
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.commands(&[if inverted { cmd::SET_INVERSE } else { cmd::SET_NORMAL }])?;
        self.inverted = inverted;
        Ok(())
    }

    /// Whether the init sequence has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Send up to [`MAX_BATCH`] commands in one transaction
    fn commands(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        for batch in commands.chunks(MAX_BATCH) {
            let mut frame: Vec<u8, { MAX_BATCH + 1 }> = Vec::new();
            // Both pushes fit: a batch never exceeds MAX_BATCH bytes.
            let _ = frame.push(CONTROL_COMMAND);
            let _ = frame.extend_from_slice(batch);
            self.i2c.write(self.address, &frame).map_err(bus_error)?;
        }
        Ok(())
    }
}

impl<I2C: I2cBus> DisplayBackend for Panel<I2C> {
    fn set_column_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError> {
        if start > end || end > LAST_COLUMN {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.commands(&[cmd::SET_COLUMN_ADDR, start, end])
    }

    fn set_page_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError> {
        if start > end || end > LAST_PAGE {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.commands(&[cmd::SET_PAGE_ADDR, start, end])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        let mut frame = [0u8; MAX_CHUNK + 1];
        frame[0] = CONTROL_DATA;

        for chunk in data.chunks(MAX_CHUNK) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &frame[..=chunk.len()])
                .map_err(bus_error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FRAME_BYTES;

    const LOG_DEPTH: usize = 32;

    /// Records every transaction's address and first bytes
    struct RecordingBus {
        transactions: Vec<(u8, Vec<u8, 8>, usize), LOG_DEPTH>,
        fail: bool,
    }

    impl RecordingBus {
        fn new() -> Self {
            Self {
                transactions: Vec::new(),
                fail: false,
            }
        }
    }

    impl I2cBus for RecordingBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            let mut head = Vec::new();
            head.extend_from_slice(&data[..data.len().min(8)]).unwrap();
            self.transactions.push((address, head, data.len())).unwrap();
            Ok(())
        }
    }

    #[test]
    fn test_init_sends_grouped_commands() {
        let mut panel = Panel::new(RecordingBus::new(), DEFAULT_ADDRESS);
        panel.init().unwrap();

        let bus = &panel.i2c;
        assert_eq!(bus.transactions.len(), INIT_SEQUENCE.len());
        for ((address, head, len), group) in bus.transactions.iter().zip(INIT_SEQUENCE) {
            assert_eq!(*address, 0x3C);
            assert_eq!(*len, group.len() + 1);
            assert_eq!(head[0], CONTROL_COMMAND);
            assert_eq!(&head[1..], *group);
        }
        assert_eq!(&bus.transactions[0].1[..], &[0x00, 0xAE, 0xD5, 0x80, 0xA8]);
        assert_eq!(&bus.transactions[6].1[..], &[0x00, 0xAF]);
        assert!(panel.is_initialized());
        assert!(panel.is_display_on());
        assert_eq!(panel.contrast(), 0x7F);
    }

    #[test]
    fn test_single_cell_write_framing() {
        let mut panel = Panel::new(RecordingBus::new(), DEFAULT_ADDRESS);
        panel.write_window(25..=25, 6..=6, &[0xA5]).unwrap();

        let t = &panel.i2c.transactions;
        assert_eq!(t.len(), 3);
        assert_eq!(&t[0].1[..], &[0x00, 0x21, 25, 25]);
        assert_eq!(&t[1].1[..], &[0x00, 0x22, 6, 6]);
        assert_eq!(&t[2].1[..], &[0x40, 0xA5]);
    }

    #[test]
    fn test_full_frame_streams_in_chunks() {
        let mut panel = Panel::new(RecordingBus::new(), DEFAULT_ADDRESS);
        panel
            .write_window(0..=LAST_COLUMN, 0..=LAST_PAGE, &[0u8; FRAME_BYTES])
            .unwrap();

        let t = &panel.i2c.transactions;
        assert_eq!(&t[0].1[..], &[0x00, 0x21, 0, 127]);
        assert_eq!(&t[1].1[..], &[0x00, 0x22, 0, 7]);
        let data: usize = t[2..].iter().map(|(_, _, len)| len - 1).sum();
        assert_eq!(data, FRAME_BYTES);
        assert!(t[2..].iter().all(|(_, head, _)| head[0] == CONTROL_DATA));
        assert_eq!(t.len(), 2 + FRAME_BYTES / MAX_CHUNK);
    }

    #[test]
    fn test_rejects_bad_windows() {
        let mut panel = Panel::new(RecordingBus::new(), DEFAULT_ADDRESS);
        assert_eq!(
            panel.set_column_window(10, 5),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            panel.set_column_window(0, 128),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            panel.set_page_window(0, 8),
            Err(DisplayError::InvalidCoordinates)
        );
        assert!(panel.i2c.transactions.is_empty());
    }

    #[test]
    fn test_bus_failure_maps_to_communication() {
        let mut bus = RecordingBus::new();
        bus.fail = true;
        let mut panel = Panel::new(bus, DEFAULT_ADDRESS);
        assert_eq!(panel.init(), Err(DisplayError::Communication));
        assert!(!panel.is_initialized());
        assert_eq!(panel.write_data(&[0xFF]), Err(DisplayError::Communication));
        assert_eq!(panel.set_contrast(0x10), Err(DisplayError::Communication));
        assert_eq!(panel.contrast(), DEFAULT_CONTRAST);
    }

    #[test]
    fn test_runtime_settings() {
        let mut panel = Panel::new(RecordingBus::new(), 0x3D);
        panel.set_contrast(0x20).unwrap();
        panel.set_inverted(true).unwrap();
        panel.set_display_on(false).unwrap();

        assert_eq!(panel.contrast(), 0x20);
        assert!(panel.is_inverted());
        assert!(!panel.is_display_on());

        let t = &panel.i2c.transactions;
        assert_eq!(t[0].0, 0x3D);
        assert_eq!(&t[0].1[..], &[0x00, 0x81, 0x20]);
        assert_eq!(&t[1].1[..], &[0x00, 0xA7]);
        assert_eq!(&t[2].1[..], &[0x00, 0xAE]);
    }
}

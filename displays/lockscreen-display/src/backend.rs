//! Display backend trait
//!
//! The UI core never talks to the bus directly. It addresses a window of
//! columns × pages and streams raw page bytes into it, column-major with
//! one byte per page per column, the same way the panel's horizontal
//! addressing mode consumes them.

use core::ops::RangeInclusive;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Window outside the panel or with start past end
    InvalidCoordinates,
}

/// Window/data interface to a page-addressed monochrome panel
pub trait DisplayBackend {
    /// Restrict subsequent data to columns `start..=end`
    fn set_column_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError>;

    /// Restrict subsequent data to pages `start..=end`
    fn set_page_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError>;

    /// Stream page bytes into the current window
    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;

    /// Address a window, then stream `data` into it
    ///
    /// The window commands are always sent, even for a single byte.
    fn write_window(
        &mut self,
        columns: RangeInclusive<u8>,
        pages: RangeInclusive<u8>,
        data: &[u8],
    ) -> Result<(), DisplayError> {
        self.set_column_window(*columns.start(), *columns.end())?;
        self.set_page_window(*pages.start(), *pages.end())?;
        self.write_data(data)
    }
}

impl<T: DisplayBackend + ?Sized> DisplayBackend for &mut T {
    fn set_column_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError> {
        T::set_column_window(self, start, end)
    }

    fn set_page_window(&mut self, start: u8, end: u8) -> Result<(), DisplayError> {
        T::set_page_window(self, start, end)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        T::write_data(self, data)
    }
}

//! Panel geometry

/// Panel width in pixels (columns)
pub const WIDTH: usize = 128;

/// Panel height in pixels (rows)
pub const HEIGHT: usize = 64;

/// Rows per page
pub const PAGE_ROWS: usize = 8;

/// Number of pages
pub const PAGES: usize = HEIGHT / PAGE_ROWS;

/// Framebuffer size in bytes
pub const FRAME_BYTES: usize = WIDTH * PAGES;

/// Last addressable column
pub const LAST_COLUMN: u8 = (WIDTH - 1) as u8;

/// Last addressable page
pub const LAST_PAGE: u8 = (PAGES - 1) as u8;

/// Page containing pixel row `y`
#[inline]
pub const fn page_of(y: usize) -> usize {
    y / PAGE_ROWS
}

/// Bit mask of pixel row `y` within its page byte
#[inline]
pub const fn row_mask(y: usize) -> u8 {
    1 << (y % PAGE_ROWS)
}

/// Check that `(x, y)` lies on the panel
#[inline]
pub fn in_bounds(x: i32, y: i32) -> bool {
    (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y)
}

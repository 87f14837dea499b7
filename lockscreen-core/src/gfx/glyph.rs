//! 5x7 font
//!
//! Lowercase letters, `.` and space. Each glyph is five columns, one byte
//! per column, bit 0 at the top. Anything else renders as a space.

use crate::config::GLYPH_COLUMNS;

/// One glyph, column-major
pub type Glyph = [u8; GLYPH_COLUMNS];

const SPACE: Glyph = [0x00, 0x00, 0x00, 0x00, 0x00];
const PERIOD: Glyph = [0x00, 0x60, 0x60, 0x00, 0x00];

const LETTERS: [Glyph; 26] = [
    [0x20, 0x52, 0x52, 0x52, 0x7C], // a
    [0x7F, 0x48, 0x48, 0x48, 0x30], // b
    [0x3C, 0x42, 0x42, 0x42, 0x24], // c
    [0x30, 0x48, 0x48, 0x48, 0x7F], // d
    [0x3C, 0x4A, 0x4A, 0x4A, 0x2C], // e
    [0x08, 0x7E, 0x0A, 0x02, 0x00], // f
    [0x24, 0x4A, 0x4A, 0x4A, 0x3E], // g
    [0x7F, 0x08, 0x08, 0x08, 0x70], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x40, 0x40, 0x3D], // j
    [0x7E, 0x08, 0x14, 0x22, 0x40], // k
    [0x00, 0x42, 0x7E, 0x40, 0x00], // l
    [0x7E, 0x02, 0x0C, 0x02, 0x7C], // m
    [0x7E, 0x02, 0x02, 0x02, 0x7C], // n
    [0x3C, 0x42, 0x42, 0x42, 0x3C], // o
    [0x7E, 0x0A, 0x0A, 0x0A, 0x04], // p
    [0x04, 0x0A, 0x0A, 0x0A, 0x7E], // q
    [0x7E, 0x02, 0x02, 0x02, 0x04], // r
    [0x4C, 0x4A, 0x52, 0x52, 0x32], // s
    [0x04, 0x04, 0x3E, 0x44, 0x24], // t
    [0x3E, 0x40, 0x40, 0x40, 0x7E], // u
    [0x1E, 0x20, 0x40, 0x20, 0x1E], // v
    [0x3E, 0x40, 0x30, 0x40, 0x3E], // w
    [0x42, 0x24, 0x18, 0x24, 0x42], // x
    [0x46, 0x48, 0x48, 0x48, 0x3E], // y
    [0x62, 0x52, 0x4A, 0x46, 0x42], // z
];

/// Glyph for one byte of text
pub fn glyph_for(c: u8) -> &'static Glyph {
    match c {
        b'a'..=b'z' => &LETTERS[(c - b'a') as usize],
        b'.' => &PERIOD,
        _ => &SPACE,
    }
}

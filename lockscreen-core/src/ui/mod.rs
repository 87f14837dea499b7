//! On-screen widgets

pub mod buttons;
pub mod cursor;

pub use buttons::{Button, ButtonRegistry};
pub use cursor::Cursor;

//! Pixel storage, compositing and text rendering
//!
//! Three logical layers (static text, button chrome, button-label mask)
//! are merged into one physical framebuffer. Only [`Canvas`] mutates the
//! framebuffer, and every mutation is followed by a bus write of exactly
//! the cells it touched.

pub mod canvas;
pub mod compose;
pub mod glyph;
pub mod layer;

pub use canvas::{Canvas, TextMode};
pub use compose::{resolve, PixelOp, PixelSources};
pub use layer::{Layer, Layers};

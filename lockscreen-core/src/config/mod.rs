//! Configuration types
//!
//! UI constants and the runtime-tunable [`UiConfig`].

pub mod types;

pub use types::*;

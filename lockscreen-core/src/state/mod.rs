//! Screen state machine
//!
//! Two screens, one transition. The machine is pure: it turns an event
//! into the next screen and an ordered list of effects, and the controller
//! carries the effects out.

pub mod events;
pub mod machine;

pub use events::{Effect, Event};
pub use machine::{Screen, Transition};

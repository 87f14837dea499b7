//! Input sampling
//!
//! Five active-low lines with pull-ups. Levels are sampled once per tick;
//! edge detection on Activate is done here rather than by interrupts.

use lockscreen_hal::InputPin;

/// Pressed state of every input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputLevels {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub activate: bool,
}

/// The five input lines
pub struct InputPins<P> {
    pub up: P,
    pub down: P,
    pub left: P,
    pub right: P,
    pub activate: P,
}

impl<P: InputPin> InputPins<P> {
    /// Read every line; a low line is pressed
    pub fn sample(&self) -> InputLevels {
        InputLevels {
            up: self.up.is_pressed(),
            down: self.down.is_pressed(),
            left: self.left.is_pressed(),
            right: self.right.is_pressed(),
            activate: self.activate.is_pressed(),
        }
    }
}

/// Press detector for a level-sampled button
#[derive(Debug, Clone, Copy, Default)]
pub struct Edge {
    was_pressed: bool,
}

impl Edge {
    pub const fn new() -> Self {
        Self { was_pressed: false }
    }

    /// Whether `pressed` is a fresh press (not held from the last sample)
    pub fn is_fresh(&self, pressed: bool) -> bool {
        pressed && !self.was_pressed
    }

    /// Remember this sample for the next one
    pub fn record(&mut self, pressed: bool) {
        self.was_pressed = pressed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePin;

    #[test]
    fn test_sample_active_low() {
        let pins = InputPins {
            up: FakePin::released(),
            down: FakePin::released(),
            left: FakePin::released(),
            right: FakePin::released(),
            activate: FakePin::released(),
        };
        assert_eq!(pins.sample(), InputLevels::default());

        pins.left.press();
        pins.activate.press();
        let levels = pins.sample();
        assert!(levels.left && levels.activate);
        assert!(!levels.up && !levels.down && !levels.right);

        pins.left.release();
        assert_eq!(
            pins.sample(),
            InputLevels {
                activate: true,
                ..InputLevels::default()
            }
        );
    }

    #[test]
    fn test_edge() {
        let mut edge = Edge::new();
        assert!(edge.is_fresh(true));
        edge.record(true);
        assert!(!edge.is_fresh(true));
        edge.record(false);
        assert!(!edge.is_fresh(false));
        assert!(edge.is_fresh(true));
    }
}

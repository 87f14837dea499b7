//! GPIO wrappers for STM32F0
//!
//! The navigation switches are wired to ground with the internal pull-up
//! enabled, so a pressed switch reads low.

use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_stm32::Peri;
use lockscreen_hal::{InputPin, OutputPin};

/// Input pin with the internal pull-up enabled
pub struct PullUpInput<'d> {
    pin: Input<'d>,
}

impl<'d> PullUpInput<'d> {
    /// Configure `pin` as a pulled-up input
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for PullUpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Push-pull output pin
pub struct PushPullOutput<'d> {
    pin: Output<'d>,
}

impl<'d> PushPullOutput<'d> {
    /// Configure `pin` as an output driven to `initial`
    pub fn new(pin: Peri<'d, impl Pin>, initial: bool) -> Self {
        let level = if initial { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, level, Speed::Low),
        }
    }
}

impl OutputPin for PushPullOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

//! Lockscreen Firmware
//!
//! Firmware for a 128x64 I2C OLED with a five-way switch (STM32F042K6).
//! Shows a lock screen with an unlock button; the switch moves a one-pixel
//! cursor and Activate over the button unlocks.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c, Master};
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use lockscreen_core::config::UiConfig;
use lockscreen_core::input::InputPins;
use lockscreen_core::{Controller, TickReport};
use lockscreen_display::Panel;
use lockscreen_hal::{I2cConfig, OutputPin};
use lockscreen_hal_stm32f0::{BlockingI2c, PullUpInput, PushPullOutput};

/// Constants generated from ui.toml
mod ui_config {
    include!(concat!(env!("OUT_DIR"), "/ui_config.rs"));
}

type Display = Panel<BlockingI2c<I2c<'static, Blocking, Master>>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lockscreen firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // The panel is powered from two GPIOs (PA7=VCC_OUT, PB1=GND_OUT)
    let mut vcc = PushPullOutput::new(p.PA7, false);
    let mut gnd = PushPullOutput::new(p.PB1, true);
    vcc.set_high();
    gnd.set_low();
    Timer::after_micros(10).await;

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let bus = I2cConfig {
        frequency: ui_config::I2C_FREQUENCY_HZ,
    };
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(bus.frequency);
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let config = UiConfig {
        pixels_per_second: ui_config::PIXELS_PER_SECOND,
        i2c_address: ui_config::I2C_ADDRESS,
        cursor_start: ui_config::CURSOR_START,
    };

    let mut panel = Panel::new(BlockingI2c::new(i2c), config.i2c_address);
    if let Err(e) = panel.init() {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!(
            "OLED initialized at {=u8:#x}, {} Hz",
            config.i2c_address, bus.frequency
        );
    }

    // Five-way switch, active low (PA0=Up, PA1=Down, PA4=Left, PA5=Right, PA6=Activate)
    let pins = InputPins {
        up: PullUpInput::new(p.PA0),
        down: PullUpInput::new(p.PA1),
        left: PullUpInput::new(p.PA4),
        right: PullUpInput::new(p.PA5),
        activate: PullUpInput::new(p.PA6),
    };

    spawner.spawn(ui_task(Controller::new(panel, config), pins)).unwrap();

    info!("All tasks spawned");
}

/// UI task - owns the display and inputs, ticks at the configured rate
#[embassy_executor::task]
async fn ui_task(mut ui: Controller<Display>, pins: InputPins<PullUpInput<'static>>) {
    info!("UI task started");

    if ui.backend_mut().is_initialized() {
        if let Err(e) = ui.backend_mut().set_contrast(ui_config::CONTRAST) {
            warn!("Failed to set contrast: {:?}", e);
        }
    }

    let mut next_tick_ms = match ui.boot() {
        Ok(report) => {
            log_report(&report);
            info!("Lock screen drawn, tick every {} ms", report.next_tick_ms);
            report.next_tick_ms
        }
        Err(e) => {
            warn!("Lock screen incomplete: {:?}", e);
            ui.config().tick_interval_ms()
        }
    };

    loop {
        Timer::after_millis(next_tick_ms as u64).await;

        let report = ui.tick(pins.sample());
        log_report(&report);
        next_tick_ms = report.next_tick_ms;
    }
}

fn log_report(report: &TickReport) {
    if report.unlocked {
        info!("Unlocked");
    }
    if let Some(highlight) = report.highlight_changed {
        debug!("Highlight: {:?}", highlight);
    }
    if report.moved {
        trace!("Cursor at ({}, {})", report.cursor.0, report.cursor.1);
    }
    if report.bus_errors > 0 {
        warn!("{} display writes failed", report.bus_errors);
    }
}

//! segmux - seven-segment display firmware
//!
//! Example RP2040 binary driving a 3-digit multiplexed seven-segment
//! display. Segment lines sit on GPIO0..GPIO7, digit enables on
//! GPIO8..GPIO10. Wiring polarity and refresh rate come from display.toml.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use segmux_core::config::DisplayConfig;
use segmux_core::{Display, Multiplexer, SharedFramebuffer};

mod board;
mod tasks;
mod timer;

/// Framebuffer shared by the update and refresh flows
static FRAMEBUFFER: SharedFramebuffer = SharedFramebuffer::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("segmux firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match board::DISPLAY.validate() {
        Ok(()) => board::DISPLAY,
        Err(e) => {
            warn!("Invalid display config ({}), using defaults", e);
            DisplayConfig::default()
        }
    };
    info!(
        "Display config: {} ms/digit, segments {}, digits {}",
        config.refresh_interval_ms, config.segment_drive, config.digit_drive
    );

    // Start every line at its off level so no digit is enabled early
    let segment_idle = Level::from(config.segment_drive.idle_level());
    let digit_idle = Level::from(config.digit_drive.idle_level());

    // Segment lines, UP first, DOT last
    let segment_pins = [
        Output::new(p.PIN_0, segment_idle),
        Output::new(p.PIN_1, segment_idle),
        Output::new(p.PIN_2, segment_idle),
        Output::new(p.PIN_3, segment_idle),
        Output::new(p.PIN_4, segment_idle),
        Output::new(p.PIN_5, segment_idle),
        Output::new(p.PIN_6, segment_idle),
        Output::new(p.PIN_7, segment_idle),
    ];

    // Digit enables: ones, tens, hundreds
    let digit_pins = [
        Output::new(p.PIN_8, digit_idle),
        Output::new(p.PIN_9, digit_idle),
        Output::new(p.PIN_10, digit_idle),
    ];

    let (segments, digits) = segmux_drivers::from_eh_pins(&config, segment_pins, digit_pins);
    let mux = Multiplexer::new(&FRAMEBUFFER, segments, digits);
    info!("Display lines initialized");

    spawner.spawn(unwrap!(tasks::refresh_task(
        mux,
        config.refresh_interval_ms
    )));
    spawner.spawn(unwrap!(tasks::app_task(Display::new(&FRAMEBUFFER))));

    info!("All tasks spawned");
}

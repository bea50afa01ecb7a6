//! Demo application task
//!
//! Cycles through a fixed list of values so every display operation can
//! be checked on the bench.

use defmt::*;
use embassy_time::{Duration, Timer};

use segmux_core::{Display, Position, Segments};

/// Time each demo value stays on the display
const HOLD: Duration = Duration::from_millis(2000);

/// One step of the demo sequence
#[derive(Clone, Copy)]
enum Demo {
    Integer(i32),
    FixedPoint(i32, i8),
    /// Symbol indices for ones, tens, hundreds
    Symbols([u8; 3]),
    /// Same raw pattern on every digit
    Custom(Segments),
    Error,
    Clear,
}

const SEQUENCE: [Demo; 14] = [
    Demo::Integer(0),
    Demo::Integer(42),
    Demo::Integer(999),
    Demo::Integer(-7),
    Demo::Integer(-99),
    Demo::Integer(1000),
    Demo::FixedPoint(25, -1),
    Demo::FixedPoint(5, -2),
    Demo::FixedPoint(-5, -1),
    Demo::FixedPoint(12, 1),
    Demo::Symbols([0xF, 0xE, 0xA]),
    Demo::Custom(Segments::MID),
    Demo::Error,
    Demo::Clear,
];

/// App task - pushes demo values through the formatter
#[embassy_executor::task]
pub async fn app_task(display: Display<'static>) {
    info!("App task started");

    loop {
        for step in SEQUENCE {
            show(&display, step);

            let text = display.framebuffer().render_text();
            info!("Display: [{}]", text.as_str());

            Timer::after(HOLD).await;
        }
    }
}

fn show(display: &Display<'_>, step: Demo) {
    match step {
        Demo::Integer(value) => display.display_integer(value),
        Demo::FixedPoint(mantissa, exponent) => display.display_fixed_point(mantissa, exponent),
        Demo::Symbols(indices) => {
            for (position, index) in Position::ALL.into_iter().zip(indices) {
                display.display_digit(position, index);
            }
        }
        Demo::Custom(segments) => {
            for position in Position::ALL {
                display.display_custom(position, segments);
            }
        }
        Demo::Error => display.display_error(),
        Demo::Clear => display.clear(),
    }
}

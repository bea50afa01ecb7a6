//! Display refresh task
//!
//! Lights one digit per refresh interval, cycling ones, tens, hundreds.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use segmux_core::Multiplexer;
use segmux_drivers::{EhDigits, EhSegments};

use crate::timer::EmbassyRefreshTimer;

/// Multiplexer wired to the board's GPIO lines
pub type BoardMultiplexer =
    Multiplexer<'static, EhSegments<Output<'static>>, EhDigits<Output<'static>>>;

/// Refresh task - drives the next digit each time the deadline passes
#[embassy_executor::task]
pub async fn refresh_task(mut mux: BoardMultiplexer, interval_ms: u16) {
    info!("Refresh task started ({} ms per digit)", interval_ms);

    let mut timer = EmbassyRefreshTimer::new(interval_ms);

    loop {
        Timer::at(timer.next_deadline()).await;

        if !mux.poll(&mut timer) {
            trace!("Woke before refresh deadline");
        }
    }
}

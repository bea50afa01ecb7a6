//! Refresh timer on top of the embassy time driver

use embassy_time::Instant;
use segmux_core::RefreshDeadline;
use segmux_hal::PeriodicTimer;

/// Periodic refresh deadline measured against [`Instant::now`]
pub struct EmbassyRefreshTimer {
    deadline: RefreshDeadline,
}

impl EmbassyRefreshTimer {
    /// Start a timer that fires every `interval_ms`, first one interval from now
    pub fn new(interval_ms: u16) -> Self {
        Self {
            deadline: RefreshDeadline::new(interval_ms, now_ms()),
        }
    }

    /// Instant of the next refresh tick
    pub fn next_deadline(&self) -> Instant {
        Instant::from_millis(self.deadline.next_ms())
    }
}

impl PeriodicTimer for EmbassyRefreshTimer {
    fn is_due(&self) -> bool {
        self.deadline.is_due(now_ms())
    }

    fn rearm(&mut self) {
        self.deadline.rearm(now_ms());
    }
}

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

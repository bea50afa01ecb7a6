//! Refresh deadline tracking
//!
//! Board code implements [`segmux_hal::PeriodicTimer`] on top of this using
//! whatever monotonic millisecond clock it has.

/// Next refresh deadline on a monotonic millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshDeadline {
    interval_ms: u64,
    next_ms: u64,
}

impl RefreshDeadline {
    /// First deadline one interval after `now_ms`
    pub const fn new(interval_ms: u16, now_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms as u64,
            next_ms: now_ms + interval_ms as u64,
        }
    }

    /// Check whether the deadline has passed
    pub const fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.next_ms
    }

    /// Move the deadline forward by one interval
    ///
    /// Keeps a steady cadence when polled on time. If `now_ms` is already
    /// past the advanced deadline the schedule restarts from `now_ms`, so a
    /// late poll fires once instead of catching up with a burst.
    pub fn rearm(&mut self, now_ms: u64) {
        self.next_ms += self.interval_ms;
        if self.next_ms <= now_ms {
            self.next_ms = now_ms + self.interval_ms;
        }
    }

    /// Current deadline
    pub const fn next_ms(&self) -> u64 {
        self.next_ms
    }

    /// Refresh interval
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

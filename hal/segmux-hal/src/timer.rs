//! Periodic timer abstraction
//!
//! The refresh tick comes from an external timer that is polled at least
//! as often as the desired refresh interval.

/// Periodic deadline source
pub trait PeriodicTimer {
    /// Check whether the current deadline has passed
    fn is_due(&self) -> bool;

    /// Schedule the next deadline
    ///
    /// Called immediately after `is_due` returned true. Implementations
    /// must not report the same period as due twice.
    fn rearm(&mut self);
}

//! Output line traits for a multiplexed display

use crate::framebuffer::Position;
use crate::segments::Segments;

/// Shared segment lines, common to every digit
///
/// Implementations translate a logical pattern (bit set = segment lit) to
/// the electrical levels of the display, e.g. inverting for common anode.
pub trait SegmentBus {
    /// Drive the segment lines with a pattern
    fn write(&mut self, segments: Segments);
}

/// Digit-enable (common) lines, one per position
///
/// At most one digit may be enabled at a time.
pub trait DigitSelect {
    /// Disable every digit
    fn disable_all(&mut self);

    /// Enable one digit
    ///
    /// Callers disable all digits first; implementations do not have to.
    fn enable(&mut self, position: Position);
}

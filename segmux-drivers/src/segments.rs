//! Segment line driver
//!
//! Writes logical segment patterns to a byte-wide port, inverting them
//! for active-low wiring (common-anode displays).

use segmux_core::config::Drive;
use segmux_core::traits::SegmentBus;
use segmux_core::Segments;
use segmux_hal::OutputPort;

/// Shared segment lines on an [`OutputPort`]
pub struct PortSegments<P> {
    port: P,
    drive: Drive,
}

impl<P: OutputPort> PortSegments<P> {
    /// Create the driver and switch every segment off
    pub fn new(port: P, drive: Drive) -> Self {
        let mut segments = Self { port, drive };
        segments.write(Segments::NONE);
        segments
    }

    /// Create the driver for active-high segment lines (common cathode)
    pub fn new_active_high(port: P) -> Self {
        Self::new(port, Drive::ActiveHigh)
    }

    /// Create the driver for active-low segment lines (common anode)
    pub fn new_active_low(port: P) -> Self {
        Self::new(port, Drive::ActiveLow)
    }

    /// Logical pattern currently on the lines
    pub fn current(&self) -> Segments {
        Segments::from_bits(self.drive.byte(self.port.value()))
    }

    /// Release the port
    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P: OutputPort> SegmentBus for PortSegments<P> {
    fn write(&mut self, segments: Segments) {
        self.port.write(self.drive.byte(segments.bits()));
    }
}

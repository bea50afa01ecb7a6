//! Output line drivers
//!
//! This crate provides concrete implementations of the line traits defined
//! in segmux-core on top of the segmux-hal primitives:
//!
//! - [`segments::PortSegments`] - shared segment lines on a byte-wide port
//! - [`digits::PinDigits`] - one enable pin per digit
//!
//! Both apply the electrical [`Drive`](segmux_core::config::Drive) of the
//! display so the core only ever deals with logical on/off.

#![no_std]
#![deny(unsafe_code)]

pub mod digits;
pub mod segments;

pub use digits::PinDigits;
pub use segments::PortSegments;

use embedded_hal::digital::StatefulOutputPin;
use segmux_core::config::DisplayConfig;
use segmux_hal::{EhOutput, PinPort};

/// Segment lines built from eight `embedded-hal` pins, UP first, DOT last
pub type EhSegments<P> = PortSegments<PinPort<EhOutput<P>>>;

/// Digit lines built from three `embedded-hal` pins, ones digit first
pub type EhDigits<P> = PinDigits<EhOutput<P>>;

/// Build segment and digit drivers from raw `embedded-hal` pins
pub fn from_eh_pins<S, D>(
    config: &DisplayConfig,
    segment_pins: [S; 8],
    digit_pins: [D; 3],
) -> (EhSegments<S>, EhDigits<D>)
where
    S: StatefulOutputPin,
    D: StatefulOutputPin,
{
    let port = PinPort::new(segment_pins.map(EhOutput::new));
    let segments = PortSegments::new(port, config.segment_drive);
    let digits = PinDigits::new(digit_pins.map(EhOutput::new), config.digit_drive);
    (segments, digits)
}

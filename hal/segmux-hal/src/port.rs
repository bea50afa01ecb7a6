//! Byte-wide output port abstraction
//!
//! The shared segment lines of a multiplexed display are written as one
//! byte. Boards with a real 8-bit port register implement [`OutputPort`]
//! directly; boards with scattered GPIOs use [`PinPort`].

use crate::gpio::OutputPin;

/// Byte-wide digital output
pub trait OutputPort {
    /// Drive all eight lines at once, bit N to line N
    fn write(&mut self, value: u8);

    /// Last value written
    fn value(&self) -> u8;
}

/// Eight independent output pins driven as one port
///
/// Bit 0 of the written value goes to `pins[0]`.
pub struct PinPort<P> {
    pins: [P; 8],
}

impl<P: OutputPin> PinPort<P> {
    /// Create a port from eight pins, least significant bit first
    pub fn new(pins: [P; 8]) -> Self {
        Self { pins }
    }

    /// Release the pins
    pub fn into_pins(self) -> [P; 8] {
        self.pins
    }
}

impl<P: OutputPin> OutputPort for PinPort<P> {
    fn write(&mut self, value: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(value & (1 << bit) != 0);
        }
    }

    fn value(&self) -> u8 {
        self.pins
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_set_high())
            .fold(0, |acc, (bit, _)| acc | (1 << bit))
    }
}

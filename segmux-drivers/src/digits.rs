//! Digit-enable line driver
//!
//! One GPIO per digit common. The pins can be configured as active-high
//! or active-low (e.g. when a PNP/NPN transistor inverts the line).

use segmux_core::config::Drive;
use segmux_core::traits::DigitSelect;
use segmux_core::Position;
use segmux_hal::OutputPin;

/// Digit-enable lines on individual pins, ones digit first
pub struct PinDigits<P> {
    pins: [P; 3],
    drive: Drive,
}

impl<P: OutputPin> PinDigits<P> {
    /// Create the driver and disable every digit
    ///
    /// # Arguments
    /// - `pins`: enable lines for the ones, tens and hundreds digit
    /// - `drive`: polarity of the enable lines
    pub fn new(pins: [P; 3], drive: Drive) -> Self {
        let mut digits = Self { pins, drive };
        digits.disable_all();
        digits
    }

    /// Create the driver with active-high enable lines
    pub fn new_active_high(pins: [P; 3]) -> Self {
        Self::new(pins, Drive::ActiveHigh)
    }

    /// Create the driver with active-low enable lines
    pub fn new_active_low(pins: [P; 3]) -> Self {
        Self::new(pins, Drive::ActiveLow)
    }

    /// Check whether a digit is currently enabled
    pub fn is_enabled(&self, position: Position) -> bool {
        let pin = &self.pins[position.index()];
        pin.is_set_high() == self.drive.level(true)
    }

    /// Number of digits currently enabled
    pub fn enabled_count(&self) -> usize {
        Position::ALL
            .iter()
            .filter(|position| self.is_enabled(**position))
            .count()
    }

    /// Release the pins
    pub fn into_pins(self) -> [P; 3] {
        self.pins
    }
}

impl<P: OutputPin> DigitSelect for PinDigits<P> {
    fn disable_all(&mut self) {
        let off = self.drive.level(false);
        for pin in &mut self.pins {
            pin.set_state(off);
        }
    }

    fn enable(&mut self, position: Position) {
        let on = self.drive.level(true);
        self.pins[position.index()].set_state(on);
    }
}

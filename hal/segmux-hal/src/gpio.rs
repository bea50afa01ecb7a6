//! GPIO pin abstractions
//!
//! Provides the digital output trait used for digit-enable and segment
//! lines, plus a bridge from `embedded-hal` 1.0 output pins.

use embedded_hal::digital::{OutputPin as EhOutputPin, StatefulOutputPin};

/// Digital output pin
///
/// Writes are assumed to take effect immediately. Implementations have no
/// way to report a failed write; the display layer cannot detect one.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter exposing an `embedded-hal` output pin as an [`OutputPin`]
///
/// The driven level is tracked locally so `is_set_high` does not need
/// `&mut` access to the wrapped pin. Pin errors are discarded.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: StatefulOutputPin> EhOutput<P> {
    /// Wrap a pin, reading back its current output level
    pub fn new(mut pin: P) -> Self {
        let high = pin.is_set_high().unwrap_or(false);
        Self { pin, high }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        self.pin.set_high().ok();
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().ok();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock embedded-hal pin for testing
    struct MockEhPin {
        high: bool,
        writes: u8,
    }

    impl ErrorType for MockEhPin {
        type Error = Infallible;
    }

    impl EhOutputPin for MockEhPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockEhPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_eh_output_reads_initial_level() {
        let out = EhOutput::new(MockEhPin { high: true, writes: 0 });
        assert!(out.is_set_high());

        let out = EhOutput::new(MockEhPin { high: false, writes: 0 });
        assert!(out.is_set_low());
    }

    #[test]
    fn test_eh_output_forwards_writes() {
        let mut out = EhOutput::new(MockEhPin { high: false, writes: 0 });

        out.set_state(true);
        assert!(out.is_set_high());
        out.set_state(false);
        assert!(out.is_set_low());

        let pin = out.into_inner();
        assert!(!pin.high);
        assert_eq!(pin.writes, 2);
    }
}

//! Framebuffer shared between the update and refresh flows
//!
//! The application updates the display from thread mode while the refresh
//! tick may run from a higher-priority interrupt. Every update composes a
//! complete [`Framebuffer`] first and publishes it with one store inside a
//! critical section, so the refresh side never sees a half-written value.

use core::cell::Cell;

use critical_section::Mutex;

use crate::format::{self, FormatError};
use crate::framebuffer::{Framebuffer, Position};
use crate::glyph::Glyph;
use crate::segments::Segments;

/// Framebuffer guarded by a critical section
///
/// Usually placed in a `static` so both flows can reach it.
pub struct SharedFramebuffer {
    inner: Mutex<Cell<Framebuffer>>,
}

impl Default for SharedFramebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFramebuffer {
    /// Create a blank shared framebuffer
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(Framebuffer::blank())),
        }
    }

    /// Copy out the current content
    pub fn load(&self) -> Framebuffer {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Replace the whole content
    pub fn store(&self, fb: Framebuffer) {
        critical_section::with(|cs| self.inner.borrow(cs).set(fb));
    }

    /// Read-modify-write inside a single critical section
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Framebuffer),
    {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut fb = cell.get();
            f(&mut fb);
            cell.set(fb);
        });
    }
}

/// Content-setting front end of the display
///
/// Every operation overwrites what is shown. Values that cannot be shown
/// put "Err" on the display instead; nothing is reported to the caller.
#[derive(Clone, Copy)]
pub struct Display<'a> {
    buffer: &'a SharedFramebuffer,
}

impl<'a> Display<'a> {
    /// Create a front end writing into `buffer`
    pub fn new(buffer: &'a SharedFramebuffer) -> Self {
        Self { buffer }
    }

    /// Show an integer in -99..=999
    pub fn display_integer(&self, value: i32) {
        self.publish(format::integer(value));
    }

    /// Show `mantissa × 10^exponent`, exponent in -2..=2
    pub fn display_fixed_point(&self, mantissa: i32, exponent: i8) {
        self.publish(format::fixed_point(mantissa, exponent));
    }

    /// Show "Err"
    pub fn display_error(&self) {
        self.buffer.store(Framebuffer::error());
    }

    /// Show the symbol with index `index` (0-15 hex digit, 16 decimal point)
    /// at one position, leaving the others untouched
    ///
    /// Unknown indices blank the position.
    pub fn display_digit(&self, position: Position, index: u8) {
        self.display_custom(position, Glyph::from_index(index).segments());
    }

    /// Put an arbitrary segment pattern at one position
    pub fn display_custom(&self, position: Position, segments: Segments) {
        self.buffer.update(|fb| fb.set(position, segments));
    }

    /// Blank the whole display
    pub fn clear(&self) {
        self.buffer.store(Framebuffer::blank());
    }

    /// Current content
    pub fn framebuffer(&self) -> Framebuffer {
        self.buffer.load()
    }

    fn publish(&self, result: Result<Framebuffer, FormatError>) {
        let fb = match result {
            Ok(fb) => fb,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Value not displayable: {}", _e);
                Framebuffer::error()
            }
        };
        self.buffer.store(fb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{MAX_INTEGER, MIN_INTEGER};
    use proptest::prelude::*;

    #[test]
    fn test_starts_blank() {
        let buffer = SharedFramebuffer::new();
        assert_eq!(buffer.load(), Framebuffer::blank());
    }

    #[test]
    fn test_display_integer_publishes() {
        let buffer = SharedFramebuffer::new();
        let display = Display::new(&buffer);

        display.display_integer(0);
        assert_eq!(
            buffer.load(),
            Framebuffer::from_glyphs([Glyph::Zero, Glyph::Blank, Glyph::Blank])
        );

        display.display_integer(-7);
        assert_eq!(
            buffer.load(),
            Framebuffer::from_glyphs([Glyph::Seven, Glyph::Blank, Glyph::Minus])
        );
    }

    #[test]
    fn test_out_of_range_shows_error() {
        let buffer = SharedFramebuffer::new();
        let display = Display::new(&buffer);

        display.display_integer(1000);
        assert_eq!(
            buffer.load(),
            Framebuffer::from_glyphs([Glyph::R, Glyph::R, Glyph::E])
        );
    }

    #[test]
    fn test_fixed_point_errors() {
        let buffer = SharedFramebuffer::new();
        let display = Display::new(&buffer);

        display.display_fixed_point(1, 3);
        assert_eq!(buffer.load(), Framebuffer::error());

        display.display_integer(5);
        display.display_fixed_point(500, 1);
        assert_eq!(buffer.load(), Framebuffer::error());

        display.display_integer(5);
        display.display_fixed_point(i32::MAX, 2);
        assert_eq!(buffer.load(), Framebuffer::error());

        // No point is added to the error message
        display.display_fixed_point(-100, -1);
        assert_eq!(buffer.load(), Framebuffer::error());
    }

    #[test]
    fn test_fixed_point_scenarios() {
        let buffer = SharedFramebuffer::new();
        let display = Display::new(&buffer);

        display.display_fixed_point(25, -1);
        assert_eq!(
            buffer.load().cells(),
            &[
                Glyph::Five.segments(),
                Glyph::Two.segments() | Segments::DOT,
                Segments::NONE,
            ]
        );

        display.display_fixed_point(5, -2);
        assert_eq!(
            buffer.load().cells(),
            &[
                Glyph::Five.segments(),
                Glyph::Zero.segments(),
                Glyph::Zero.segments() | Segments::DOT,
            ]
        );
    }

    #[test]
    fn test_display_error_overwrites() {
        let buffer = SharedFramebuffer::new();
        let display = Display::new(&buffer);

        display.display_integer(888);
        display.display_error();
        assert_eq!(display.framebuffer().render_text().as_str(), "Err");
    }

    #[test]
    fn test_display_digit_single_position() {
        let buffer = SharedFramebuffer::new();
        let display = Display::new(&buffer);

        display.display_integer(123);
        display.display_digit(Position::Tens, 0xA);
        assert_eq!(display.framebuffer().render_text().as_str(), "1A3");

        display.display_digit(Position::Ones, 16);
        assert_eq!(buffer.load().get(Position::Ones), Segments::DOT);

        display.display_digit(Position::Hundreds, 42);
        assert_eq!(buffer.load().get(Position::Hundreds), Segments::NONE);
    }

    #[test]
    fn test_display_custom_and_clear() {
        let buffer = SharedFramebuffer::new();
        let display = Display::new(&buffer);

        let bars = Segments::UP | Segments::MID | Segments::BOT;
        display.display_custom(Position::Hundreds, bars);
        assert_eq!(buffer.load().get(Position::Hundreds), bars);
        assert_eq!(buffer.load().get(Position::Ones), Segments::NONE);

        display.clear();
        assert_eq!(buffer.load(), Framebuffer::blank());
    }

    proptest! {
        #[test]
        fn prop_out_of_range_replaces_any_content(
            previous in MIN_INTEGER..=MAX_INTEGER,
            value in any::<i32>(),
        ) {
            prop_assume!(!(MIN_INTEGER..=MAX_INTEGER).contains(&value));
            let buffer = SharedFramebuffer::new();
            let display = Display::new(&buffer);

            display.display_integer(previous);
            display.display_integer(value);
            prop_assert_eq!(buffer.load(), Framebuffer::error());
        }
    }
}

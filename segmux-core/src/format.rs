//! Number formatting
//!
//! Turns integers and fixed-point values into a complete [`Framebuffer`].
//! These functions report why a value cannot be shown; the display front
//! end ([`crate::shared::Display`]) turns any error into the "Err" message.

use crate::bcd::{self, DIGITS};
use crate::framebuffer::{Framebuffer, Position};
use crate::glyph::Glyph;

/// Smallest displayable integer (the sign takes the leftmost digit)
pub const MIN_INTEGER: i32 = -99;

/// Largest displayable integer
pub const MAX_INTEGER: i32 = 999;

/// Smallest fixed-point exponent (two decimal places)
pub const MIN_EXPONENT: i8 = -2;

/// Largest fixed-point exponent
pub const MAX_EXPONENT: i8 = 2;

/// Reasons a value cannot be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Integer outside [`MIN_INTEGER`]..=[`MAX_INTEGER`]
    ValueOutOfRange(i32),
    /// Exponent outside [`MIN_EXPONENT`]..=[`MAX_EXPONENT`]
    ExponentOutOfRange(i8),
    /// Scaling the mantissa overflowed `i32`
    Overflow,
}

/// Format an integer
///
/// Leading zeros are blanked, but the ones digit is always shown. A
/// negative value puts its sign on the leftmost digit, which is why the
/// range stops at -99.
pub fn integer(value: i32) -> Result<Framebuffer, FormatError> {
    if !(MIN_INTEGER..=MAX_INTEGER).contains(&value) {
        return Err(FormatError::ValueOutOfRange(value));
    }

    // In range, so the magnitude fits in u16
    let digits = bcd::digits(value.unsigned_abs() as u16);

    let mut significant = DIGITS;
    while significant > 1 && digits[significant - 1] == 0 {
        significant -= 1;
    }

    let mut fb = Framebuffer::blank();
    for (position, digit) in Position::ALL.iter().zip(digits).take(significant) {
        fb.set_glyph(*position, Glyph::digit(digit));
    }

    if value < 0 {
        fb.set_glyph(Position::Hundreds, Glyph::Minus);
    }

    Ok(fb)
}

/// Format `mantissa × 10^exponent`
///
/// Positive exponents scale the mantissa before formatting it as an
/// integer. Negative exponents format the mantissa as-is and light the
/// decimal point one or two digits from the right, filling blank digits
/// up to the point with zeros (`5, -2` shows `0.05`).
pub fn fixed_point(mantissa: i32, exponent: i8) -> Result<Framebuffer, FormatError> {
    match exponent {
        0..=MAX_EXPONENT => {
            let scaled = mantissa
                .checked_mul(10i32.pow(exponent as u32))
                .ok_or(FormatError::Overflow)?;
            integer(scaled)
        }
        MIN_EXPONENT..=-1 => {
            let mut fb = integer(mantissa)?;
            let point = if exponent == -1 {
                Position::Tens
            } else {
                Position::Hundreds
            };

            for position in &Position::ALL[Position::Tens.index()..=point.index()] {
                if fb.get(*position).is_blank() {
                    fb.set_glyph(*position, Glyph::Zero);
                }
            }
            fb.set_dot(point);

            Ok(fb)
        }
        _ => Err(FormatError::ExponentOutOfRange(exponent)),
    }
}

//! Binary to packed BCD conversion
//!
//! Decimal digit `i` (0 = ones) occupies bits `4*i..4*i+4` of the result.

/// Number of decimal digits on the display
pub const DIGITS: usize = 3;

/// Largest value that fits in [`DIGITS`] decimal digits
pub const MAX_VALUE: u16 = 999;

/// Convert a binary value to packed BCD
///
/// The caller guarantees `value <= MAX_VALUE`; larger values would shift
/// digits past the top of the result.
pub const fn to_bcd(mut value: u16) -> u16 {
    let mut bcd = 0;
    let mut shift = 0;
    while value > 0 {
        bcd |= (value % 10) << shift;
        shift += 4;
        value /= 10;
    }
    bcd
}

/// Extract decimal digit `index` from a packed BCD value
pub const fn nibble(bcd: u16, index: usize) -> u8 {
    ((bcd >> (4 * index)) & 0x0F) as u8
}

/// Decimal digits of `value`, ones first
pub const fn digits(value: u16) -> [u8; DIGITS] {
    let bcd = to_bcd(value);
    [nibble(bcd, 0), nibble(bcd, 1), nibble(bcd, 2)]
}

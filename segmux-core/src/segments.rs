//! Segment bit patterns
//!
//! One byte per digit position. Every bit maps to a physical LED:
//!
//! ```text
//!     ─UP─
//!   UL    UR
//!     ─MID─
//!   BL    BR
//!     ─BOT─  DOT
//! ```
//!
//! | bit | segment |
//! |-----|---------|
//! | 0   | `UP`    |
//! | 1   | `UL`    |
//! | 2   | `UR`    |
//! | 3   | `MID`   |
//! | 4   | `BL`    |
//! | 5   | `BR`    |
//! | 6   | `BOT`   |
//! | 7   | `DOT`   |

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Segment pattern for a single digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    /// Upper horizontal
    pub const UP: Self = Self(1 << 0);
    /// Upper-left vertical
    pub const UL: Self = Self(1 << 1);
    /// Upper-right vertical
    pub const UR: Self = Self(1 << 2);
    /// Middle horizontal
    pub const MID: Self = Self(1 << 3);
    /// Lower-left vertical
    pub const BL: Self = Self(1 << 4);
    /// Lower-right vertical
    pub const BR: Self = Self(1 << 5);
    /// Bottom horizontal
    pub const BOT: Self = Self(1 << 6);
    /// Decimal point
    pub const DOT: Self = Self(1 << 7);

    /// All segments off
    pub const NONE: Self = Self(0);

    /// Every physical segment, decimal point included
    pub const ALL: Self = Self(0xFF);

    /// Create a pattern from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bits, suitable for a segment port write
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Combine two patterns (usable in const context)
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether every segment of `other` is lit
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether no segment is lit
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Pattern with the decimal point cleared
    pub const fn without_dot(self) -> Self {
        Self(self.0 & !Self::DOT.0)
    }

    /// Pattern with the decimal point lit
    pub const fn with_dot(self) -> Self {
        self.union(Self::DOT)
    }
}

impl BitOr for Segments {
    type Output = Segments;

    fn bitor(self, rhs: Segments) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Segments {
    fn bitor_assign(&mut self, rhs: Segments) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Segments {
    type Output = Segments;

    fn bitand(self, rhs: Segments) -> Self::Output {
        Segments(self.0 & rhs.0)
    }
}

impl Not for Segments {
    type Output = Segments;

    fn not(self) -> Self::Output {
        Segments(!self.0)
    }
}

impl From<Segments> for u8 {
    fn from(segments: Segments) -> u8 {
        segments.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_bits_are_distinct() {
        let all = [
            Segments::UP,
            Segments::UL,
            Segments::UR,
            Segments::MID,
            Segments::BL,
            Segments::BR,
            Segments::BOT,
            Segments::DOT,
        ];

        let combined = all.iter().fold(Segments::NONE, |acc, s| acc | *s);
        assert_eq!(combined, Segments::ALL);
        assert!(all.iter().all(|s| s.bits().count_ones() == 1));
    }

    #[test]
    fn test_dot_helpers() {
        let seven = Segments::UP | Segments::UR | Segments::BR;

        let dotted = seven.with_dot();
        assert!(dotted.contains(Segments::DOT));
        assert_eq!(dotted.without_dot(), seven);
        assert!(!seven.contains(Segments::DOT));
    }

    #[test]
    fn test_blank() {
        assert!(Segments::NONE.is_blank());
        assert!(!Segments::DOT.is_blank());
        assert_eq!(Segments::default(), Segments::NONE);
    }

    #[test]
    fn test_mask_ops() {
        let one = Segments::UR | Segments::BR;
        let seven = one | Segments::UP;

        assert_eq!(seven & one, one);
        assert_eq!(seven & Segments::DOT, Segments::NONE);
        assert_eq!(!Segments::NONE, Segments::ALL);
        assert_eq!(seven & !Segments::UP, one);
        assert_eq!(u8::from(!Segments::ALL), 0);
    }
}

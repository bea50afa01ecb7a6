//! Digit symbols and their segment patterns
//!
//! The symbol → pattern table is fixed and must match the wiring of the
//! display bit for bit.

use crate::segments::Segments;

const UP: Segments = Segments::UP;
const UL: Segments = Segments::UL;
const UR: Segments = Segments::UR;
const MID: Segments = Segments::MID;
const BL: Segments = Segments::BL;
const BR: Segments = Segments::BR;
const BOT: Segments = Segments::BOT;

/// Combine segments in a const context
macro_rules! pattern {
    ($($seg:ident)|+) => {
        Segments::NONE$(.union($seg))+
    };
}

/// Symbol that can be shown on one digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    A,
    B,
    C,
    D,
    E,
    F,
    /// Decimal point alone
    Dot,
    /// Negative sign
    Minus,
    /// Lower-case "r" of the error message
    R,
    /// All segments off
    Blank,
}

impl Glyph {
    /// Every glyph, in symbol-index order for the first 17 entries
    pub const ALL: [Glyph; 20] = [
        Glyph::Zero,
        Glyph::One,
        Glyph::Two,
        Glyph::Three,
        Glyph::Four,
        Glyph::Five,
        Glyph::Six,
        Glyph::Seven,
        Glyph::Eight,
        Glyph::Nine,
        Glyph::A,
        Glyph::B,
        Glyph::C,
        Glyph::D,
        Glyph::E,
        Glyph::F,
        Glyph::Dot,
        Glyph::Minus,
        Glyph::R,
        Glyph::Blank,
    ];

    /// Map a symbol index to a glyph
    ///
    /// 0-15 are the hexadecimal digits and 16 is the bare decimal point.
    /// Anything else is shown as [`Glyph::Blank`].
    pub const fn from_index(index: u8) -> Glyph {
        if index <= 16 {
            Self::ALL[index as usize]
        } else {
            Glyph::Blank
        }
    }

    /// Glyph for a decimal digit (0-9), blank otherwise
    pub const fn digit(value: u8) -> Glyph {
        if value <= 9 {
            Self::from_index(value)
        } else {
            Glyph::Blank
        }
    }

    /// Segment pattern lit for this glyph
    pub const fn segments(self) -> Segments {
        match self {
            Glyph::Zero => pattern!(BOT | UL | UR | UP | BL | BR),
            Glyph::One => pattern!(BR | UR),
            Glyph::Two => pattern!(UP | UR | MID | BL | BOT),
            Glyph::Three => pattern!(UP | UR | MID | BR | BOT),
            Glyph::Four => pattern!(UL | MID | UR | BR),
            Glyph::Five => pattern!(UP | UL | MID | BR | BOT),
            Glyph::Six => pattern!(UP | UL | MID | BL | BOT | BR),
            Glyph::Seven => pattern!(UP | UR | BR),
            Glyph::Eight => pattern!(UP | UR | BR | UL | BL | MID | BOT),
            Glyph::Nine => pattern!(UP | UR | BR | UL | MID | BOT),
            Glyph::A => pattern!(UP | UR | BR | UL | BL | MID),
            Glyph::B => pattern!(BR | UL | MID | BL | BOT),
            Glyph::C => pattern!(UP | UL | BL | BOT),
            Glyph::D => pattern!(UR | BR | BL | MID | BOT),
            Glyph::E => pattern!(UP | UL | BL | MID | BOT),
            Glyph::F => pattern!(UP | UL | BL | MID),
            Glyph::Dot => Segments::DOT,
            Glyph::R => pattern!(BL | MID),
            Glyph::Minus => MID,
            Glyph::Blank => Segments::NONE,
        }
    }

    /// Reverse lookup, ignoring a decimal point on top of a symbol
    ///
    /// Returns `None` for custom patterns that are not in the table.
    pub fn from_segments(segments: Segments) -> Option<Glyph> {
        if segments == Segments::DOT {
            return Some(Glyph::Dot);
        }
        let body = segments.without_dot();
        Self::ALL
            .iter()
            .copied()
            .filter(|glyph| *glyph != Glyph::Dot)
            .find(|glyph| glyph.segments() == body)
    }

    /// Printable form used for logs and text rendering
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Zero => '0',
            Glyph::One => '1',
            Glyph::Two => '2',
            Glyph::Three => '3',
            Glyph::Four => '4',
            Glyph::Five => '5',
            Glyph::Six => '6',
            Glyph::Seven => '7',
            Glyph::Eight => '8',
            Glyph::Nine => '9',
            Glyph::A => 'A',
            Glyph::B => 'b',
            Glyph::C => 'C',
            Glyph::D => 'd',
            Glyph::E => 'E',
            Glyph::F => 'F',
            Glyph::Dot => '.',
            Glyph::Minus => '-',
            Glyph::R => 'r',
            Glyph::Blank => ' ',
        }
    }
}

impl From<Glyph> for Segments {
    fn from(glyph: Glyph) -> Segments {
        glyph.segments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_bits() {
        // UP=0x01 UL=0x02 UR=0x04 MID=0x08 BL=0x10 BR=0x20 BOT=0x40 DOT=0x80
        assert_eq!(Glyph::Zero.segments().bits(), 0x77);
        assert_eq!(Glyph::One.segments().bits(), 0x24);
        assert_eq!(Glyph::Two.segments().bits(), 0x5D);
        assert_eq!(Glyph::Three.segments().bits(), 0x6D);
        assert_eq!(Glyph::Four.segments().bits(), 0x2E);
        assert_eq!(Glyph::Five.segments().bits(), 0x6B);
        assert_eq!(Glyph::Six.segments().bits(), 0x7B);
        assert_eq!(Glyph::Seven.segments().bits(), 0x25);
        assert_eq!(Glyph::Eight.segments().bits(), 0x7F);
        assert_eq!(Glyph::Nine.segments().bits(), 0x6F);
        assert_eq!(Glyph::A.segments().bits(), 0x3F);
        assert_eq!(Glyph::B.segments().bits(), 0x7A);
        assert_eq!(Glyph::C.segments().bits(), 0x53);
        assert_eq!(Glyph::D.segments().bits(), 0x7C);
        assert_eq!(Glyph::E.segments().bits(), 0x5B);
        assert_eq!(Glyph::F.segments().bits(), 0x1B);
        assert_eq!(Glyph::Dot.segments().bits(), 0x80);
        assert_eq!(Glyph::R.segments().bits(), 0x18);
        assert_eq!(Glyph::Minus.segments().bits(), 0x08);
        assert_eq!(Glyph::Blank.segments().bits(), 0x00);
    }

    #[test]
    fn test_patterns_are_unique() {
        for (i, a) in Glyph::ALL.iter().enumerate() {
            for b in &Glyph::ALL[i + 1..] {
                assert_ne!(a.segments(), b.segments(), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Glyph::from_index(0), Glyph::Zero);
        assert_eq!(Glyph::from_index(9), Glyph::Nine);
        assert_eq!(Glyph::from_index(15), Glyph::F);
        assert_eq!(Glyph::from_index(16), Glyph::Dot);
    }

    #[test]
    fn test_out_of_range_index_is_blank() {
        for index in 17..=u8::MAX {
            assert_eq!(Glyph::from_index(index), Glyph::Blank);
        }
        assert_eq!(Glyph::digit(10), Glyph::Blank);
    }

    #[test]
    fn test_reverse_lookup() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_segments(glyph.segments()), Some(glyph));
        }

        let dotted_two = Glyph::Two.segments().with_dot();
        assert_eq!(Glyph::from_segments(dotted_two), Some(Glyph::Two));

        // Custom pattern: top and bottom bars only
        assert_eq!(Glyph::from_segments(Segments::UP | Segments::BOT), None);
    }
}

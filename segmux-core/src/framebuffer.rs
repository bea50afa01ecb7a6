//! Display framebuffer
//!
//! Three segment patterns, one per digit position. Position 0 is the
//! rightmost (least significant) digit.

use heapless::String;

use crate::bcd::DIGITS;
use crate::glyph::Glyph;
use crate::segments::Segments;

/// Maximum length of [`Framebuffer::render_text`]: a glyph and a point per digit
pub const TEXT_LEN: usize = DIGITS * 2;

/// Digit position on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Rightmost digit
    Ones = 0,
    /// Middle digit
    Tens = 1,
    /// Leftmost digit
    Hundreds = 2,
}

impl Position {
    /// All positions, rightmost first
    pub const ALL: [Position; DIGITS] = [Position::Ones, Position::Tens, Position::Hundreds];

    /// Array index of this position
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position for an index, if it is on the display
    pub const fn from_index(index: usize) -> Option<Position> {
        match index {
            0 => Some(Position::Ones),
            1 => Some(Position::Tens),
            2 => Some(Position::Hundreds),
            _ => None,
        }
    }

    /// Next position in multiplex order, wrapping after the leftmost digit
    pub const fn next(self) -> Position {
        match self {
            Position::Ones => Position::Tens,
            Position::Tens => Position::Hundreds,
            Position::Hundreds => Position::Ones,
        }
    }
}

/// Segment patterns for the whole display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Framebuffer {
    cells: [Segments; DIGITS],
}

impl Framebuffer {
    /// All positions blank
    pub const fn blank() -> Self {
        Self {
            cells: [Segments::NONE; DIGITS],
        }
    }

    /// The "Err" message
    pub const fn error() -> Self {
        Self::from_glyphs([Glyph::R, Glyph::R, Glyph::E])
    }

    /// Build from raw patterns, rightmost first
    pub const fn from_cells(cells: [Segments; DIGITS]) -> Self {
        Self { cells }
    }

    /// Build from glyphs, rightmost first
    pub const fn from_glyphs(glyphs: [Glyph; DIGITS]) -> Self {
        Self {
            cells: [
                glyphs[0].segments(),
                glyphs[1].segments(),
                glyphs[2].segments(),
            ],
        }
    }

    /// Pattern at a position
    pub const fn get(&self, position: Position) -> Segments {
        self.cells[position.index()]
    }

    /// Overwrite the pattern at a position
    pub fn set(&mut self, position: Position, segments: Segments) {
        self.cells[position.index()] = segments;
    }

    /// Overwrite a position with a glyph
    pub fn set_glyph(&mut self, position: Position, glyph: Glyph) {
        self.set(position, glyph.segments());
    }

    /// Light the decimal point at a position, keeping the rest of the pattern
    pub fn set_dot(&mut self, position: Position) {
        self.cells[position.index()] |= Segments::DOT;
    }

    /// Raw patterns, rightmost first
    pub const fn cells(&self) -> &[Segments; DIGITS] {
        &self.cells
    }

    /// Render as text, leftmost digit first
    ///
    /// A lit decimal point follows its digit (`" 2.5"`). Patterns that are
    /// not in the glyph table render as `'?'`.
    pub fn render_text(&self) -> String<TEXT_LEN> {
        let mut text = String::new();
        for segments in self.cells.iter().rev() {
            let ch = match Glyph::from_segments(*segments) {
                Some(Glyph::Dot) => {
                    let _ = text.push(' ');
                    '.'
                }
                Some(glyph) => glyph.as_char(),
                None => '?',
            };
            let _ = text.push(ch);
            if *segments != Segments::DOT && segments.contains(Segments::DOT) {
                let _ = text.push('.');
            }
        }
        text
    }
}

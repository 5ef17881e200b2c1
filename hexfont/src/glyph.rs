//! Glyph records.

use crate::bitmap::GlyphWidth;

/// Combining class assigned to every glyph until combining information says
/// otherwise. Any positive value marks a spacing glyph.
pub const NON_COMBINING: i8 = 0x7F;

/// Entry in the glyph table of a [`HexFont`](crate::HexFont).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphRecord {
    pub(crate) codepoint: u32,
    pub(crate) bitmap_offset: u32,
    pub(crate) width: GlyphWidth,
    pub(crate) combining: i8,
}

impl GlyphRecord {
    /// Returns the codepoint this glyph is mapped to.
    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// Returns the byte offset of the packed bitmap in the font's bitmap
    /// store.
    pub fn bitmap_offset(&self) -> u32 {
        self.bitmap_offset
    }

    /// Returns the width class.
    pub fn width(&self) -> GlyphWidth {
        self.width
    }

    /// Returns the raw combining class.
    pub fn combining(&self) -> i8 {
        self.combining
    }

    /// Returns how the glyph interacts with the pen.
    pub fn kind(&self) -> GlyphKind {
        if self.combining > 0 {
            GlyphKind::Spacing
        } else {
            GlyphKind::Combining(self.combining)
        }
    }
}

/// Rendering mode of a glyph, derived from its combining class.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GlyphKind {
    /// Drawn at the pen position, then advances the pen by the glyph width.
    Spacing,
    /// Drawn shifted horizontally by the given (non-positive) number of
    /// unscaled pixels and leaves the pen where it is.
    Combining(i8),
}

impl GlyphKind {
    /// Horizontal draw offset in unscaled pixels.
    pub fn x_offset(self) -> i32 {
        match self {
            Self::Spacing => 0,
            Self::Combining(offset) => offset as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(combining: i8) -> GlyphRecord {
        GlyphRecord {
            codepoint: 0x300,
            bitmap_offset: 0,
            width: GlyphWidth::Normal,
            combining,
        }
    }

    #[test]
    fn classification() {
        assert_eq!(record(NON_COMBINING).kind(), GlyphKind::Spacing);
        assert_eq!(record(1).kind(), GlyphKind::Spacing);
        assert_eq!(record(0).kind(), GlyphKind::Combining(0));
        assert_eq!(record(-8).kind(), GlyphKind::Combining(-8));
        assert_eq!(record(i8::MIN).kind().x_offset(), -128);
        assert_eq!(record(NON_COMBINING).kind().x_offset(), 0);
    }
}

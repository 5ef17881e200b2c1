//! Storage for packed glyph bitmaps.
//!
//! Every glyph in a hex font is 16 pixels tall and either 8 or 16 pixels
//! wide. Pixels are stored one bit each, row-major, with the most significant
//! bit of each byte being the leftmost pixel. A narrow glyph therefore takes
//! one byte per row and a wide glyph two.

/// Height of every glyph in pixels.
pub const GLYPH_HEIGHT: u32 = 16;

/// Horizontal size class of a glyph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlyphWidth {
    /// 8 pixels wide, 16 bytes of bitmap data.
    Normal,
    /// 16 pixels wide, 32 bytes of bitmap data.
    Wide,
}

impl GlyphWidth {
    /// Returns the width class for a bitmap of the given size in bytes.
    ///
    /// Returns `None` for any length other than 16 or 32.
    pub fn from_byte_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Normal),
            32 => Some(Self::Wide),
            _ => None,
        }
    }

    /// Returns the width in pixels.
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Normal => 8,
            Self::Wide => 16,
        }
    }

    /// Returns the size of a packed bitmap of this width in bytes.
    pub const fn byte_len(self) -> usize {
        (self.pixels() * GLYPH_HEIGHT / 8) as usize
    }
}

/// A single growable buffer holding every glyph bitmap back to back.
///
/// Glyph records refer to their bitmap by byte offset; the length is implied
/// by the record's [`GlyphWidth`].
#[derive(Clone, Default, Debug)]
pub(crate) struct BitmapStore {
    data: Vec<u8>,
}

impl BitmapStore {
    /// Appends a packed bitmap and returns its offset.
    ///
    /// Returns `None` if the offset would not fit in 32 bits, in which case
    /// nothing is appended.
    pub fn push(&mut self, bits: &[u8]) -> Option<u32> {
        let offset = u32::try_from(self.data.len()).ok()?;
        self.data.extend_from_slice(bits);
        Some(offset)
    }

    /// Returns the packed bitmap of the given width at `offset`.
    pub fn get(&self, offset: u32, width: GlyphWidth) -> Option<&[u8]> {
        let start = offset as usize;
        self.data.get(start..start.checked_add(width.byte_len())?)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }
}

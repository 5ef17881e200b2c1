//! The glyph database built from a hex font.

use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    bitmap::BitmapStore, glyph::GlyphRecord, hex, image::GlyphImage, Error, ParseOptions,
};

/// A fully loaded hex font.
///
/// Holds every glyph bitmap in a single buffer along with a table of glyph
/// records sorted by codepoint. A font is built once by one of the `from_*`
/// constructors, optionally adjusted with combining information, and is then
/// read-only. Wrap it in an [`Arc`](std::sync::Arc) to share it between any
/// number of [`Face`](crate::Face)s and threads.
#[derive(Clone)]
pub struct HexFont {
    bitmaps: BitmapStore,
    glyphs: Vec<GlyphRecord>,
    /// Codepoints below this value are equal to their index in `glyphs`.
    continuous_prefix_len: usize,
    /// Index of the U+FFFD glyph.
    placeholder: Option<usize>,
}

impl HexFont {
    pub(crate) fn from_parts(
        bitmaps: BitmapStore,
        glyphs: Vec<GlyphRecord>,
        continuous_prefix_len: usize,
        placeholder: Option<usize>,
    ) -> Self {
        Self {
            bitmaps,
            glyphs,
            continuous_prefix_len,
            placeholder,
        }
    }

    /// Loads a hex font from a stream.
    ///
    /// The stream is consumed to the end. On error nothing is returned and
    /// the input may be corrected and loaded again.
    pub fn from_reader(reader: impl Read, options: ParseOptions) -> Result<Self, Error> {
        hex::parse(BufReader::new(reader), options)
    }

    /// Loads a hex font from a string.
    pub fn from_hex_str(text: &str, options: ParseOptions) -> Result<Self, Error> {
        hex::parse(text.as_bytes(), options)
    }

    /// Loads a hex font from a `.hex` file.
    pub fn from_file(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?, options)
    }

    /// Loads a hex font from a gzip compressed `.hex.gz` file.
    #[cfg(feature = "gzip")]
    pub fn from_gz_file(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self, Error> {
        Self::from_reader(gz_reader(path)?, options)
    }

    /// Returns the number of glyphs in the font.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns all glyph records, sorted by codepoint.
    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    /// Returns the length of the run of codepoints starting at U+0000 that
    /// the font covers without gaps.
    pub fn continuous_prefix_len(&self) -> usize {
        self.continuous_prefix_len
    }

    /// Returns the glyph drawn for codepoints missing from the font, if the
    /// font has one.
    pub fn placeholder(&self) -> Option<&GlyphRecord> {
        self.glyphs.get(self.placeholder?)
    }

    /// Returns the packed bitmap for the given glyph.
    ///
    /// Returns `None` if the record does not belong to this font.
    pub fn bitmap(&self, glyph: &GlyphRecord) -> Option<&[u8]> {
        self.bitmaps.get(glyph.bitmap_offset, glyph.width)
    }

    /// Returns a view of the glyph's pixels scaled by `multiplier`.
    ///
    /// Returns `None` if the record does not belong to this font or the
    /// multiplier is outside `1..=MAX_MULTIPLIER`.
    pub fn glyph_image(&self, glyph: &GlyphRecord, multiplier: u32) -> Option<GlyphImage<'_>> {
        GlyphImage::new(self.bitmap(glyph)?, glyph.width, multiplier)
    }

    /// Looks up the glyph for a codepoint.
    ///
    /// Codepoints the font does not cover resolve to the placeholder glyph
    /// (U+FFFD), if available, with [`Resolved::found`] returning false.
    pub fn resolve(&self, codepoint: u32) -> Resolved<'_> {
        match self.find_index(codepoint) {
            Some(index) => Resolved::Found(&self.glyphs[index]),
            None => match self.placeholder() {
                Some(placeholder) => Resolved::Placeholder(placeholder),
                None => Resolved::Missing,
            },
        }
    }

    /// Returns the table index of the glyph mapped to exactly `codepoint`.
    pub(crate) fn find_index(&self, codepoint: u32) -> Option<usize> {
        let prefix = self.continuous_prefix_len;
        let index = codepoint as usize;
        if index < prefix {
            return Some(index);
        }
        self.glyphs[prefix..]
            .binary_search_by_key(&codepoint, |glyph| glyph.codepoint)
            .ok()
            .map(|ix| prefix + ix)
    }

    pub(crate) fn glyphs_mut(&mut self) -> &mut [GlyphRecord] {
        &mut self.glyphs
    }
}

impl fmt::Debug for HexFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexFont")
            .field("glyph_count", &self.glyphs.len())
            .field("bitmap_bytes", &self.bitmaps.len())
            .field("continuous_prefix_len", &self.continuous_prefix_len)
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

/// Result of looking up a codepoint with [`HexFont::resolve`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Resolved<'a> {
    /// The font has a glyph for the codepoint.
    Found(&'a GlyphRecord),
    /// The font has no glyph for the codepoint; this is the placeholder.
    Placeholder(&'a GlyphRecord),
    /// The font has neither a glyph for the codepoint nor a placeholder.
    Missing,
}

impl<'a> Resolved<'a> {
    /// Returns the glyph to draw, if any.
    pub fn glyph(self) -> Option<&'a GlyphRecord> {
        match self {
            Self::Found(glyph) | Self::Placeholder(glyph) => Some(glyph),
            Self::Missing => None,
        }
    }

    /// Returns true if the font has a glyph for the requested codepoint.
    pub fn found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[cfg(feature = "gzip")]
pub(crate) fn gz_reader(path: impl AsRef<Path>) -> Result<impl Read, Error> {
    // multi-member archives are read as one stream, like `gzip -d`
    Ok(flate2::read::MultiGzDecoder::new(BufReader::new(File::open(
        path,
    )?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bitmap::GlyphWidth, glyph::NON_COMBINING};
    use font_test_data::{
        hex as data, SAMPLE_CONTINUOUS_PREFIX, SAMPLE_GLYPH_COUNT, SAMPLE_HEX,
        SAMPLE_NON_PRIVATE_GLYPH_COUNT,
    };

    fn sample() -> HexFont {
        HexFont::from_hex_str(SAMPLE_HEX, ParseOptions::default()).unwrap()
    }

    #[test]
    fn table_is_strictly_ascending() {
        for options in [
            ParseOptions::new(),
            ParseOptions::new().exclude_private_use(true),
        ] {
            let font = HexFont::from_hex_str(SAMPLE_HEX, options).unwrap();
            assert!(font
                .glyphs()
                .windows(2)
                .all(|pair| pair[0].codepoint() < pair[1].codepoint()));
        }
    }

    #[test]
    fn sample_shape() {
        let font = sample();
        assert_eq!(font.glyph_count(), SAMPLE_GLYPH_COUNT);
        assert_eq!(font.continuous_prefix_len(), SAMPLE_CONTINUOUS_PREFIX as usize);
        let public = HexFont::from_hex_str(
            SAMPLE_HEX,
            ParseOptions::new().exclude_private_use(true),
        )
        .unwrap();
        assert_eq!(public.glyph_count(), SAMPLE_NON_PRIVATE_GLYPH_COUNT);
        assert!(public.placeholder().is_some());
        // every glyph starts out as a spacing glyph
        assert!(font.glyphs().iter().all(|g| g.combining() == NON_COMBINING));
    }

    #[test]
    fn continuous_prefix_maps_to_index() {
        let font = sample();
        for codepoint in 0..font.continuous_prefix_len() as u32 {
            let resolved = font.resolve(codepoint);
            assert!(resolved.found());
            assert_eq!(resolved.glyph(), Some(&font.glyphs()[codepoint as usize]));
            assert_eq!(resolved.glyph().unwrap().codepoint(), codepoint);
        }
    }

    #[test]
    fn binary_search_suffix() {
        let font = sample();
        for glyph in &font.glyphs()[font.continuous_prefix_len()..] {
            assert_eq!(font.resolve(glyph.codepoint()), Resolved::Found(glyph));
        }
        let wide = font.resolve('井' as u32).glyph().unwrap();
        assert_eq!(wide.width(), GlyphWidth::Wide);
    }

    #[test]
    fn missing_codepoints_use_placeholder() {
        let font = sample();
        let placeholder = font.placeholder().unwrap();
        assert_eq!(placeholder.codepoint(), 0xFFFD);
        for codepoint in [0x80, 0x2FF, 0x302, 0xFFFC, 0xFFFE, 0x10FFFF, 0x110000, u32::MAX] {
            let resolved = font.resolve(codepoint);
            assert!(!resolved.found(), "{codepoint:X}");
            assert_eq!(resolved, Resolved::Placeholder(placeholder));
        }
        // the placeholder itself is a regular hit
        assert!(font.resolve(0xFFFD).found());
    }

    #[test]
    fn missing_without_placeholder() {
        let font = HexFont::from_hex_str(data::LATIN_CAPITAL_A, ParseOptions::default()).unwrap();
        assert_eq!(font.resolve('B' as u32), Resolved::Missing);
        assert_eq!(font.resolve('B' as u32).glyph(), None);
        assert!(font.resolve('A' as u32).found());
    }

    #[test]
    fn foreign_records_have_no_bitmap() {
        let small = HexFont::from_hex_str(data::LATIN_CAPITAL_A, ParseOptions::default()).unwrap();
        let font = sample();
        let last = font.glyphs().last().unwrap();
        assert!(small.bitmap(last).is_none());
        assert!(small.glyph_image(last, 1).is_none());
    }

    #[test]
    fn share_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HexFont>();
    }
}

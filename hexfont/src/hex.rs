//! Parser for the `.hex` bitmap font format.
//!
//! Each line of a hex font holds one glyph as `CODEPOINT:BITMAP`, both in
//! hexadecimal, sorted by ascending codepoint:
//!
//! ```text
//! 0041:0000000018242442427E424242000000
//! ```
//!
//! The bitmap is 16 bytes for an 8x16 glyph or 32 bytes for a 16x16 glyph.

use std::io::BufRead;

use crate::{
    bitmap::{BitmapStore, GlyphWidth},
    font::HexFont,
    glyph::{GlyphRecord, NON_COMBINING},
    lines::{parse_codepoint, split_fields, Lines},
    Error,
};

/// The replacement character, drawn in place of codepoints the font does not
/// cover.
pub const PLACEHOLDER_CODEPOINT: u32 = 0xFFFD;

/// Options controlling how a hex font is loaded.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct ParseOptions {
    exclude_private_use: bool,
}

impl ParseOptions {
    /// Creates the default options, which keep every glyph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether glyphs in the Private Use Areas are dropped while
    /// loading.
    ///
    /// See [`is_private_use`] for the affected ranges.
    pub fn exclude_private_use(mut self, exclude: bool) -> Self {
        self.exclude_private_use = exclude;
        self
    }

    /// Returns true if glyphs in the Private Use Areas are dropped.
    pub fn excludes_private_use(&self) -> bool {
        self.exclude_private_use
    }
}

/// Returns true if the codepoint is in one of the Private Use Areas:
/// U+E000..=U+F8FF, U+F0000..=U+FFFFF or U+100000..=U+10FFFF.
pub fn is_private_use(codepoint: u32) -> bool {
    matches!(codepoint, 0xE000..=0xF8FF | 0xF0000..=0xFFFFF | 0x100000..=0x10FFFF)
}

/// Parses a complete hex font from `reader`.
pub(crate) fn parse(reader: impl BufRead, options: ParseOptions) -> Result<HexFont, Error> {
    let mut builder = Builder::default();
    let mut lines = Lines::new(reader);
    let mut scratch = Vec::with_capacity(32);
    while let Some((line, text)) = lines.next_line()? {
        let (codepoint, bitmap) = split_fields(text).ok_or(Error::Format {
            line,
            reason: "expected CODEPOINT:BITMAP",
        })?;
        let codepoint = parse_codepoint(codepoint).ok_or(Error::Format {
            line,
            reason: "codepoint is not hexadecimal",
        })?;
        if options.exclude_private_use && is_private_use(codepoint) {
            log::trace!("skipping private use glyph U+{codepoint:04X}");
            continue;
        }
        if let Some(previous) = builder.last_codepoint() {
            if codepoint <= previous {
                return Err(Error::Order {
                    line,
                    codepoint,
                    previous,
                });
            }
        }
        decode_hex(bitmap, &mut scratch).ok_or(Error::Format {
            line,
            reason: "bitmap is not hexadecimal",
        })?;
        let width = GlyphWidth::from_byte_len(scratch.len()).ok_or(Error::GlyphSize {
            line,
            codepoint,
            len: scratch.len(),
        })?;
        builder.push(codepoint, width, &scratch).ok_or(Error::Format {
            line,
            reason: "bitmap data exceeds 4 GiB",
        })?;
    }
    Ok(builder.finish())
}

/// Accumulates glyphs for a font under construction.
///
/// Only reachable through [`parse`], so a failed parse drops the builder and
/// nothing else ever observes it.
#[derive(Default)]
struct Builder {
    bitmaps: BitmapStore,
    glyphs: Vec<GlyphRecord>,
    continuous_prefix_len: usize,
    placeholder: Option<usize>,
}

impl Builder {
    fn last_codepoint(&self) -> Option<u32> {
        self.glyphs.last().map(|glyph| glyph.codepoint)
    }

    /// Caller guarantees that `codepoint` is greater than every codepoint
    /// pushed so far.
    fn push(&mut self, codepoint: u32, width: GlyphWidth, bits: &[u8]) -> Option<()> {
        let bitmap_offset = self.bitmaps.push(bits)?;
        let index = self.glyphs.len();
        // The prefix only grows while no codepoint has been skipped, which
        // keeps index == codepoint for every glyph in it.
        if self.continuous_prefix_len == index && codepoint as usize == index {
            self.continuous_prefix_len += 1;
        }
        if codepoint == PLACEHOLDER_CODEPOINT {
            self.placeholder = Some(index);
        }
        self.glyphs.push(GlyphRecord {
            codepoint,
            bitmap_offset,
            width,
            combining: NON_COMBINING,
        });
        Some(())
    }

    fn finish(mut self) -> HexFont {
        self.bitmaps.shrink_to_fit();
        self.glyphs.shrink_to_fit();
        log::debug!(
            "loaded {} glyphs ({} bytes of bitmaps), continuous prefix {}, placeholder {}",
            self.glyphs.len(),
            self.bitmaps.len(),
            self.continuous_prefix_len,
            if self.placeholder.is_some() {
                "present"
            } else {
                "missing"
            }
        );
        HexFont::from_parts(
            self.bitmaps,
            self.glyphs,
            self.continuous_prefix_len,
            self.placeholder,
        )
    }
}

/// Decodes pairs of hex digits into `out`, replacing its contents.
///
/// Returns `None` for an odd number of digits or any non-hex character.
fn decode_hex(text: &str, out: &mut Vec<u8>) -> Option<()> {
    out.clear();
    let digits = text.as_bytes();
    if digits.len() % 2 != 0 {
        return None;
    }
    for pair in digits.chunks_exact(2) {
        out.push((nibble(pair[0])? << 4) | nibble(pair[1])?);
    }
    Some(())
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

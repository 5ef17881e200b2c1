//! Combining mark offsets.
//!
//! GNU Unifont ships the horizontal offsets of its combining marks in
//! separate `*-combining.txt` files, one `CODEPOINT:OFFSET` pair per line
//! with the codepoint in hexadecimal and the offset as a signed decimal
//! number of pixels:
//!
//! ```text
//! 0300:-8
//! ```
//!
//! A single input for [`HexFont::apply_combining`] can be produced from a
//! copy of the Unifont sources with
//!
//! ```text
//! shopt -s globstar
//! sort -u **/*-combining.txt > combining.txt
//! ```

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    font::HexFont,
    lines::{parse_codepoint, split_fields, Lines},
    Error,
};

impl HexFont {
    /// Applies combining information read from a stream.
    ///
    /// Lines for codepoints that are not in the font are ignored. Codepoints
    /// may carry a sign, and negative ones are ignored the same way. The whole
    /// stream is validated before any glyph is touched: on error the font is
    /// left exactly as it was.
    pub fn apply_combining(&mut self, reader: impl Read) -> Result<(), Error> {
        self.apply_combining_lines(BufReader::new(reader))
    }

    /// Applies combining information from a string.
    pub fn apply_combining_str(&mut self, text: &str) -> Result<(), Error> {
        self.apply_combining_lines(text.as_bytes())
    }

    /// Applies combining information from a `combining.txt` file.
    pub fn apply_combining_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.apply_combining(File::open(path)?)
    }

    /// Applies combining information from a gzip compressed
    /// `combining.txt.gz` file.
    #[cfg(feature = "gzip")]
    pub fn apply_combining_gz_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.apply_combining(crate::font::gz_reader(path)?)
    }

    fn apply_combining_lines(&mut self, reader: impl BufRead) -> Result<(), Error> {
        let changes = stage(self, reader)?;
        let glyphs = self.glyphs_mut();
        for (&index, &combining) in &changes {
            glyphs[index].combining = combining;
        }
        log::debug!("applied combining info to {} glyphs", changes.len());
        Ok(())
    }
}

/// Reads the whole stream, returning new combining classes keyed by glyph
/// table index.
fn stage(font: &HexFont, reader: impl BufRead) -> Result<HashMap<usize, i8>, Error> {
    let mut changes = HashMap::new();
    let mut lines = Lines::new(reader);
    while let Some((line, text)) = lines.next_line()? {
        let (codepoint, offset) = split_fields(text).ok_or(Error::Format {
            line,
            reason: "expected CODEPOINT:OFFSET",
        })?;
        let not_hex = Error::Format {
            line,
            reason: "codepoint is not hexadecimal",
        };
        // a negative codepoint never names a glyph
        if let Some(magnitude) = codepoint.strip_prefix('-') {
            parse_codepoint(magnitude).ok_or(not_hex)?;
            continue;
        }
        let codepoint = codepoint.strip_prefix('+').unwrap_or(codepoint);
        let codepoint = parse_codepoint(codepoint).ok_or(not_hex)?;
        let Some(index) = font.find_index(codepoint) else {
            continue;
        };
        if changes.contains_key(&index) {
            return Err(Error::Duplicate { line, codepoint });
        }
        let offset = offset.parse::<i8>().map_err(|_| Error::Format {
            line,
            reason: "offset is not a signed 8-bit decimal",
        })?;
        changes.insert(index, offset);
    }
    Ok(changes)
}

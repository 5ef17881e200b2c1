//! Line splitting shared by the hex and combining parsers.

use std::io::BufRead;

use crate::Error;

/// Reads `\n` terminated lines, reusing a single buffer.
///
/// A trailing `\r` is stripped and a final line without a terminator is
/// still returned. Lines that are not UTF-8 are reported as format errors.
pub(crate) struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(80),
            line: 0,
        }
    }

    /// Returns the next line with its 1-based number, or `None` at the end of
    /// the stream.
    pub fn next_line(&mut self) -> Result<Option<(usize, &str)>, Error> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        let text = std::str::from_utf8(bytes).map_err(|_| Error::Format {
            line: self.line,
            reason: "line is not valid UTF-8",
        })?;
        Ok(Some((self.line, text)))
    }
}

/// Splits a line into exactly two colon separated fields.
pub(crate) fn split_fields(text: &str) -> Option<(&str, &str)> {
    let mut fields = text.split(':');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}

/// Parses a codepoint written as bare hexadecimal digits.
pub(crate) fn parse_codepoint(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(field, 16).ok()
}

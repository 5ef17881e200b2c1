//! Error types for loading hex fonts and building faces.

use core::fmt;

/// Errors that may occur while loading a hex font, applying combining
/// information or creating a face.
///
/// All errors are fatal to the operation that produced them and leave no
/// partially constructed state behind.
#[derive(Debug)]
pub enum Error {
    /// A line was malformed: wrong number of fields or a field that is not
    /// valid hexadecimal or decimal.
    Format {
        /// 1-based line number.
        line: usize,
        reason: &'static str,
    },
    /// A codepoint was not strictly greater than the one before it.
    Order {
        line: usize,
        codepoint: u32,
        previous: u32,
    },
    /// A bitmap decoded to something other than 16 or 32 bytes.
    GlyphSize {
        line: usize,
        codepoint: u32,
        len: usize,
    },
    /// The same codepoint was assigned combining information twice.
    Duplicate { line: usize, codepoint: u32 },
    /// Reading the underlying stream failed.
    Io(std::io::Error),
    /// The requested scale multiplier is zero or too large.
    InvalidMultiplier(u32),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Format { line, reason } => write!(f, "line {line}: {reason}"),
            Self::Order {
                line,
                codepoint,
                previous,
            } => write!(
                f,
                "line {line}: codepoint U+{codepoint:04X} does not follow U+{previous:04X}, hex file is not sorted"
            ),
            Self::GlyphSize {
                line,
                codepoint,
                len,
            } => write!(
                f,
                "line {line}: glyph U+{codepoint:04X} has {len} bytes of bitmap data, expected 16 or 32"
            ),
            Self::Duplicate { line, codepoint } => {
                write!(f, "line {line}: duplicate combining info for U+{codepoint:04X}")
            }
            Self::Io(e) => write!(f, "{e}"),
            Self::InvalidMultiplier(m) => write!(
                f,
                "multiplier {m} is out of range 1..={}",
                crate::face::MAX_MULTIPLIER
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

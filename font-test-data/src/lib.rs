//! test data shared between the hexfont crates.
//!
//! The sample font covers U+0000..=U+007F without gaps, a handful of Latin-1
//! letters and combining marks, one wide CJK ideograph, an emoji, a wide
//! U+FFFD placeholder and one glyph in each Private Use Area.

pub mod hex;

pub static SAMPLE_HEX: &str = include_str!("../test_data/hex/sample.hex");

pub static SAMPLE_HEX_GZ: &[u8] = include_bytes!("../test_data/hex/sample.hex.gz");

pub static SAMPLE_COMBINING: &str = include_str!("../test_data/combining/combining.txt");

pub static SAMPLE_COMBINING_GZ: &[u8] =
    include_bytes!("../test_data/combining/combining.txt.gz");

/// Number of glyphs in [`SAMPLE_HEX`].
pub const SAMPLE_GLYPH_COUNT: usize = 141;

/// Number of glyphs in [`SAMPLE_HEX`] outside the Private Use Areas.
pub const SAMPLE_NON_PRIVATE_GLYPH_COUNT: usize = 137;

/// Codepoints `0..SAMPLE_CONTINUOUS_PREFIX` are all present in [`SAMPLE_HEX`].
pub const SAMPLE_CONTINUOUS_PREFIX: u32 = 0x80;

/// Paths for tests that exercise the file based constructors.
pub mod paths {
    pub static SAMPLE_HEX: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/hex/sample.hex");

    pub static SAMPLE_HEX_GZ: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/hex/sample.hex.gz");

    pub static SAMPLE_COMBINING: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/test_data/combining/combining.txt"
    );

    pub static SAMPLE_COMBINING_GZ: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/test_data/combining/combining.txt.gz"
    );
}

//! Loading and drawing of hex bitmap fonts.
//!
//! The hex format is the line oriented source format of
//! [GNU Unifont](https://unifoundry.com/unifont/): every line maps one
//! codepoint to an 8x16 or 16x16 monochrome bitmap. This crate loads such a
//! font into a compact in-memory [`HexFont`] and presents it at any integer
//! scale through a [`Face`].
//!
//! ```
//! use std::sync::Arc;
//! use hexfont::{Face, GlyphFace, HexFont, ParseOptions};
//!
//! let font = HexFont::from_hex_str(
//!     "0041:0000000018242442427E424242000000",
//!     ParseOptions::default(),
//! )?;
//! let face = Face::new(Arc::new(font), 2)?;
//! let advance = face.glyph_advance('A' as u32).unwrap();
//! assert_eq!(advance.advance.to_bits(), 16 << 6);
//! # Ok::<(), hexfont::Error>(())
//! ```
//!
//! Glyph lookup falls back to U+FFFD for codepoints the font does not cover.
//! Shaping, bidi and line breaking are left to the caller.

#![forbid(unsafe_code)]

/// Expose the crate providing our fixed point and geometry types.
pub extern crate font_types as types;

pub mod bitmap;
pub mod face;
pub mod glyph;
pub mod hex;
pub mod image;

mod combining;
mod error;
mod font;
mod lines;

pub use bitmap::{GlyphWidth, GLYPH_HEIGHT};
pub use error::Error;
pub use face::{
    DrawGlyph, Face, FaceMetrics, GlyphAdvance, GlyphBounds, GlyphFace, MAX_MULTIPLIER,
};
pub use font::{HexFont, Resolved};
pub use glyph::{GlyphKind, GlyphRecord, NON_COMBINING};
pub use hex::{is_private_use, ParseOptions, PLACEHOLDER_CODEPOINT};
pub use image::GlyphImage;

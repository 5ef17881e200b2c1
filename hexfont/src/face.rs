//! Hex fonts as scalable glyph faces.
//!
//! A [`Face`] presents a shared [`HexFont`] at an integer scale through the
//! [`GlyphFace`] trait, which is what a text layout or drawing engine
//! consumes. The engine owns the pen position: it asks for the glyph at the
//! current dot, composites the returned mask into the destination rectangle
//! and moves the pen by the returned advance.
//!
//! All geometry uses a y-down coordinate system with the dot on the baseline.
//! Glyphs sit entirely above the baseline, so their rectangles span
//! `dot.y - 16 * multiplier .. dot.y`.
//!
//! Combining marks (glyphs with a non-positive combining class) are shifted
//! left by their combining class times the multiplier and do not advance the
//! pen, so they overlay the glyph drawn before them.

use std::sync::Arc;

use font_types::{BoundingBox, F26Dot6, Point};

use crate::{
    bitmap::GLYPH_HEIGHT,
    font::HexFont,
    glyph::{GlyphKind, GlyphRecord},
    image::GlyphImage,
    Error,
};

/// Largest supported scale multiplier.
///
/// At this scale a wide glyph is a 4096x4096 pixel mask.
pub const MAX_MULTIPLIER: u32 = 256;

/// Interface between a set of fixed bitmap glyphs and a text drawing engine.
///
/// Every method takes `&self` and is a pure function of its arguments, so a
/// face can be used from several threads at once.
///
/// Methods returning an `Option` produce `None` only when there is nothing
/// at all to draw: the codepoint is missing and the face has no placeholder.
/// Otherwise the result describes either the requested glyph or the
/// placeholder, with `found` telling the two apart so that the caller can
/// substitute its own fallback.
pub trait GlyphFace {
    /// Returns the glyph for `codepoint` positioned at `dot`.
    fn glyph(&self, dot: Point<F26Dot6>, codepoint: u32) -> Option<DrawGlyph<'_>>;

    /// Returns the bounds of the glyph for `codepoint` relative to the dot,
    /// without producing a mask.
    fn glyph_bounds(&self, codepoint: u32) -> Option<GlyphBounds>;

    /// Returns the advance of the glyph for `codepoint`.
    fn glyph_advance(&self, codepoint: u32) -> Option<GlyphAdvance>;

    /// Returns the kerning adjustment between two codepoints.
    fn kern(&self, first: u32, second: u32) -> F26Dot6;

    /// Returns metrics that apply to every glyph of the face.
    fn metrics(&self) -> FaceMetrics;
}

/// A glyph ready to be composited.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DrawGlyph<'a> {
    /// Destination rectangle in whole pixels.
    pub rect: BoundingBox<i32>,
    /// Alpha mask to composite into `rect`.
    pub mask: GlyphImage<'a>,
    /// Point of the mask that maps to the top left corner of `rect`.
    pub mask_origin: Point<i32>,
    /// Distance to move the pen after drawing.
    pub advance: F26Dot6,
    /// False if this is the placeholder standing in for a missing glyph.
    pub found: bool,
}

/// Bounds and advance of a glyph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GlyphBounds {
    /// Bounds relative to the dot.
    pub bounds: BoundingBox<F26Dot6>,
    /// Distance to move the pen after drawing.
    pub advance: F26Dot6,
    /// False if these are the bounds of the placeholder.
    pub found: bool,
}

/// Advance of a glyph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GlyphAdvance {
    /// Distance to move the pen after drawing.
    pub advance: F26Dot6,
    /// False if this is the advance of the placeholder.
    pub found: bool,
}

/// Metrics that apply to all glyphs in a face.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct FaceMetrics {
    /// Recommended distance between consecutive baselines.
    pub height: F26Dot6,
    /// Distance from the baseline to the top of the glyphs.
    pub ascent: F26Dot6,
    /// Distance from the baseline to the bottom of the glyphs.
    pub descent: F26Dot6,
    /// Height of lowercase letters above the baseline. Bitmap glyphs have no
    /// outline to measure, so this is the full glyph height.
    pub x_height: F26Dot6,
    /// Height of capital letters above the baseline, also the full glyph
    /// height.
    pub cap_height: F26Dot6,
    /// Slope of the caret as a rise over run vector; `(0, 1)` is upright.
    pub caret_slope: Point<i32>,
}

/// A [`HexFont`] rendered at a fixed integer scale.
///
/// Faces are cheap to create and clone. They share the font rather than
/// copying any glyph data, and the font lives until the last face and any
/// other reference to it are dropped.
#[derive(Clone, Debug)]
pub struct Face {
    font: Arc<HexFont>,
    multiplier: u32,
}

impl Face {
    /// Creates a face drawing every pixel of the font as a
    /// `multiplier x multiplier` square. A multiplier of 1 gives the native
    /// 16 pixel line height, 2 gives 32 pixels, and so on.
    pub fn new(font: Arc<HexFont>, multiplier: u32) -> Result<Self, Error> {
        if !(1..=MAX_MULTIPLIER).contains(&multiplier) {
            return Err(Error::InvalidMultiplier(multiplier));
        }
        Ok(Self { font, multiplier })
    }

    /// Returns the underlying font.
    pub fn font(&self) -> &Arc<HexFont> {
        &self.font
    }

    /// Returns the scale multiplier.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    fn line_height(&self) -> i32 {
        (GLYPH_HEIGHT * self.multiplier) as i32
    }

    fn placement(&self, glyph: &GlyphRecord) -> Placement {
        let m = self.multiplier as i32;
        let width = glyph.width().pixels() as i32 * m;
        match glyph.kind() {
            GlyphKind::Spacing => Placement {
                x_offset: 0,
                width,
                advance: width,
            },
            kind @ GlyphKind::Combining(_) => Placement {
                x_offset: kind.x_offset() * m,
                width,
                advance: 0,
            },
        }
    }
}

/// Horizontal layout of a glyph in scaled pixels.
struct Placement {
    x_offset: i32,
    width: i32,
    advance: i32,
}

impl GlyphFace for Face {
    fn glyph(&self, dot: Point<F26Dot6>, codepoint: u32) -> Option<DrawGlyph<'_>> {
        let resolved = self.font.resolve(codepoint);
        let glyph = resolved.glyph()?;
        let mask = self.font.glyph_image(glyph, self.multiplier)?;
        let placement = self.placement(glyph);
        let x = round_to_pixel(dot.x) + placement.x_offset;
        let y = round_to_pixel(dot.y);
        Some(DrawGlyph {
            rect: BoundingBox {
                x_min: x,
                y_min: y - self.line_height(),
                x_max: x + placement.width,
                y_max: y,
            },
            mask,
            mask_origin: Point::new(0, 0),
            advance: F26Dot6::from_i32(placement.advance),
            found: resolved.found(),
        })
    }

    fn glyph_bounds(&self, codepoint: u32) -> Option<GlyphBounds> {
        let resolved = self.font.resolve(codepoint);
        let placement = self.placement(resolved.glyph()?);
        Some(GlyphBounds {
            bounds: BoundingBox {
                x_min: F26Dot6::from_i32(placement.x_offset),
                y_min: F26Dot6::from_i32(-self.line_height()),
                x_max: F26Dot6::from_i32(placement.x_offset + placement.width),
                y_max: F26Dot6::ZERO,
            },
            advance: F26Dot6::from_i32(placement.advance),
            found: resolved.found(),
        })
    }

    fn glyph_advance(&self, codepoint: u32) -> Option<GlyphAdvance> {
        let resolved = self.font.resolve(codepoint);
        let placement = self.placement(resolved.glyph()?);
        Some(GlyphAdvance {
            advance: F26Dot6::from_i32(placement.advance),
            found: resolved.found(),
        })
    }

    fn kern(&self, _first: u32, _second: u32) -> F26Dot6 {
        // hex fonts carry no pair adjustments
        F26Dot6::ZERO
    }

    fn metrics(&self) -> FaceMetrics {
        let height = F26Dot6::from_i32(self.line_height());
        FaceMetrics {
            height,
            ascent: height,
            descent: F26Dot6::ZERO,
            x_height: height,
            cap_height: height,
            caret_slope: Point::new(0, 1),
        }
    }
}

/// Rounds to the nearest whole pixel, ties towards positive infinity.
fn round_to_pixel(value: F26Dot6) -> i32 {
    value.to_bits().wrapping_add(32) >> 6
}

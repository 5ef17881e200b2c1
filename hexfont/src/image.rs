//! Scaled views of packed glyph bitmaps.

use crate::{
    bitmap::{GlyphWidth, GLYPH_HEIGHT},
    face::MAX_MULTIPLIER,
};

/// Alpha value of a set pixel, on a 16-bit scale.
pub const OPAQUE: u16 = 0xFFFF;

/// Alpha value of a clear pixel.
pub const TRANSPARENT: u16 = 0;

/// Maps an arbitrary alpha value into the binary color model of glyph masks:
/// only fully opaque stays opaque.
pub fn monochrome_alpha(alpha: u16) -> u16 {
    if alpha == OPAQUE {
        OPAQUE
    } else {
        TRANSPARENT
    }
}

/// A read-only alpha mask over a glyph's packed bitmap, scaled up by an
/// integer multiplier using nearest-neighbor replication.
///
/// Pixels are computed on access; nothing is unpacked or copied up front.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GlyphImage<'a> {
    bits: &'a [u8],
    width: GlyphWidth,
    multiplier: u32,
}

impl<'a> GlyphImage<'a> {
    /// Creates a view over `bits`, which must hold exactly one packed glyph of
    /// the given width.
    ///
    /// Returns `None` if the data has the wrong size or the multiplier is
    /// outside `1..=MAX_MULTIPLIER`.
    pub fn new(bits: &'a [u8], width: GlyphWidth, multiplier: u32) -> Option<Self> {
        let valid_multiplier = (1..=MAX_MULTIPLIER).contains(&multiplier);
        (bits.len() == width.byte_len() && valid_multiplier).then_some(Self {
            bits,
            width,
            multiplier,
        })
    }

    /// Returns the scale multiplier.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Returns the width of the scaled mask in pixels.
    pub fn width(&self) -> u32 {
        self.width.pixels() * self.multiplier
    }

    /// Returns the height of the scaled mask in pixels.
    pub fn height(&self) -> u32 {
        GLYPH_HEIGHT * self.multiplier
    }

    /// Returns `(width, height)` of the scaled mask.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Returns true if the pixel at `(x, y)` is set. Coordinates outside the
    /// mask are never set.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        if x >= self.width() || y >= self.height() {
            return false;
        }
        let bit = (x / self.multiplier + y / self.multiplier * self.width.pixels()) as usize;
        self.bits[bit >> 3] & (0x80 >> (bit & 7)) != 0
    }

    /// Returns the 16-bit alpha of the pixel at `(x, y)`: either [`OPAQUE`]
    /// or [`TRANSPARENT`].
    pub fn alpha(&self, x: i32, y: i32) -> u16 {
        if self.is_set(x, y) {
            OPAQUE
        } else {
            TRANSPARENT
        }
    }

    /// Returns an iterator over the rows of the mask, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + 'a {
        let image = *self;
        (0..image.height()).map(move |y| Row { image, y })
    }

    /// Unpacks the whole mask into one byte per pixel, `0xFF` for set pixels
    /// and `0x00` otherwise, in row-major order.
    pub fn to_coverage(&self) -> Vec<u8> {
        let mut coverage = Vec::with_capacity(self.width() as usize * self.height() as usize);
        for row in self.rows() {
            coverage.extend(row.pixels().map(|set| if set { 0xFF } else { 0 }));
        }
        coverage
    }
}

/// A single row of a [`GlyphImage`].
#[derive(Copy, Clone, Debug)]
pub struct Row<'a> {
    image: GlyphImage<'a>,
    y: u32,
}

impl<'a> Row<'a> {
    /// Returns the vertical position of the row.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Returns an iterator over the pixels of the row, left to right.
    pub fn pixels(&self) -> impl Iterator<Item = bool> + 'a {
        let Row { image, y } = *self;
        (0..image.width()).map(move |x| image.is_set(x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use font_test_data::hex::LATIN_CAPITAL_A_BITS;

    /// Packs one bool per pixel, MSB first.
    fn pack(pixels: &[bool]) -> Vec<u8> {
        pixels
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &set)| byte | ((set as u8) << (7 - i)))
            })
            .collect()
    }

    /// Deterministic pseudo random pixels.
    fn pattern(len: usize, seed: u32) -> Vec<bool> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
                state >> 16 & 1 != 0
            })
            .collect()
    }

    #[test]
    fn latin_capital_a() {
        let image = GlyphImage::new(&LATIN_CAPITAL_A_BITS, GlyphWidth::Normal, 1).unwrap();
        assert_eq!(image.dimensions(), (8, 16));
        let rendered: Vec<String> = image
            .rows()
            .map(|row| row.pixels().map(|set| if set { '#' } else { '.' }).collect())
            .collect();
        let expected = [
            "........", "........", "........", "........", "...##...", "..#..#..",
            "..#..#..", ".#....#.", ".#....#.", ".######.", ".#....#.", ".#....#.",
            ".#....#.", "........", "........", "........",
        ];
        assert_eq!(rendered, expected);
    }

    #[test]
    fn pack_unpack_round_trip() {
        for (width, seed) in [
            (GlyphWidth::Normal, 1),
            (GlyphWidth::Normal, 7),
            (GlyphWidth::Wide, 3),
            (GlyphWidth::Wide, 11),
        ] {
            let pixels = pattern((width.pixels() * GLYPH_HEIGHT) as usize, seed);
            let bits = pack(&pixels);
            let image = GlyphImage::new(&bits, width, 1).unwrap();
            let unpacked: Vec<bool> = image.rows().flat_map(|row| row.pixels()).collect();
            assert_eq!(unpacked, pixels);
        }
    }

    #[test]
    fn scaling_replicates_pixels() {
        let pixels = pattern(256, 5);
        let bits = pack(&pixels);
        let unscaled = GlyphImage::new(&bits, GlyphWidth::Wide, 1).unwrap();
        for multiplier in [2, 3, 6] {
            let scaled = GlyphImage::new(&bits, GlyphWidth::Wide, multiplier).unwrap();
            assert_eq!(scaled.width(), unscaled.width() * multiplier);
            assert_eq!(scaled.height(), unscaled.height() * multiplier);
            let m = multiplier as i32;
            for y in 0..scaled.height() as i32 {
                for x in 0..scaled.width() as i32 {
                    assert_eq!(scaled.is_set(x, y), unscaled.is_set(x / m, y / m));
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_is_transparent() {
        let bits = [0xFF; 16];
        let image = GlyphImage::new(&bits, GlyphWidth::Normal, 2).unwrap();
        assert_eq!(image.alpha(0, 0), OPAQUE);
        assert_eq!(image.alpha(15, 31), OPAQUE);
        for (x, y) in [(-1, 0), (0, -1), (16, 0), (0, 32), (i32::MAX, i32::MAX)] {
            assert_eq!(image.alpha(x, y), TRANSPARENT, "({x}, {y})");
        }
    }

    #[test]
    fn coverage_buffer() {
        let mut bits = [0u8; 16];
        bits[0] = 0x81;
        let image = GlyphImage::new(&bits, GlyphWidth::Normal, 1).unwrap();
        let coverage = image.to_coverage();
        assert_eq!(coverage.len(), 8 * 16);
        assert_eq!(&coverage[..8], &[0xFF, 0, 0, 0, 0, 0, 0, 0xFF]);
        assert!(coverage[8..].iter().all(|&a| a == 0));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(GlyphImage::new(&[0; 16], GlyphWidth::Wide, 1).is_none());
        assert!(GlyphImage::new(&[0; 32], GlyphWidth::Normal, 1).is_none());
        assert!(GlyphImage::new(&[0; 16], GlyphWidth::Normal, 0).is_none());
        assert!(GlyphImage::new(&[0; 16], GlyphWidth::Normal, MAX_MULTIPLIER + 1).is_none());
    }

    #[test]
    fn largest_multiplier() {
        let mut bits = [0u8; 32];
        // top left and bottom right pixels of a wide glyph
        bits[0] = 0x80;
        bits[31] = 0x01;
        let image = GlyphImage::new(&bits, GlyphWidth::Wide, MAX_MULTIPLIER).unwrap();
        let (width, height) = image.dimensions();
        assert_eq!((width, height), (16 * MAX_MULTIPLIER, 16 * MAX_MULTIPLIER));
        let coverage = image.to_coverage();
        assert_eq!(coverage.len(), width as usize * height as usize);
        let m = MAX_MULTIPLIER as usize;
        assert_eq!(coverage.iter().filter(|&&a| a == 0xFF).count(), 2 * m * m);
        assert_eq!(coverage[0], 0xFF);
        assert_eq!(coverage[coverage.len() - 1], 0xFF);
        assert_eq!(image.rows().count(), height as usize);
        let last_row = image.rows().last().unwrap();
        assert_eq!(last_row.y(), height - 1);
        assert_eq!(last_row.pixels().filter(|&set| set).count(), m);
    }

    #[test]
    fn color_model() {
        assert_eq!(monochrome_alpha(OPAQUE), OPAQUE);
        assert_eq!(monochrome_alpha(0xFFFE), TRANSPARENT);
        assert_eq!(monochrome_alpha(0x8000), TRANSPARENT);
        assert_eq!(monochrome_alpha(TRANSPARENT), TRANSPARENT);
    }
}

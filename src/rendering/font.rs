//! Glyph rasterizers
//!
//! The label is the only fallible part of rendering, so glyph lookup sits
//! behind a trait. `BitmapFont` is the built-in default; `NoGlyphs` stands in
//! for an environment with no usable font and always fails.

use crate::{Error, Result};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between consecutive glyphs, before scaling
pub const GLYPH_SPACING: u32 = 1;

/// A monochrome glyph: one row per entry, bit 4 is the leftmost column.
pub type GlyphBitmap = [u8; GLYPH_HEIGHT as usize];

/// Source of glyph bitmaps for text paint commands.
pub trait GlyphRasterizer: Send + Sync {
    fn glyph(&self, ch: char) -> Result<GlyphBitmap>;

    /// Resolve every glyph in `text`, failing on the first one that is missing.
    fn layout(&self, text: &str) -> Result<Vec<GlyphBitmap>> {
        text.chars().map(|c| self.glyph(c)).collect()
    }
}

/// Built-in 5x7 font covering A-Z, 0-9 and space. Lowercase letters are
/// drawn with their uppercase shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn new() -> Self {
        BitmapFont
    }
}

impl GlyphRasterizer for BitmapFont {
    fn glyph(&self, ch: char) -> Result<GlyphBitmap> {
        lookup(ch.to_ascii_uppercase()).ok_or(Error::MissingGlyph(ch))
    }
}

/// Provider with no glyphs at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGlyphs;

impl GlyphRasterizer for NoGlyphs {
    fn glyph(&self, _ch: char) -> Result<GlyphBitmap> {
        Err(Error::GlyphError("no font available".into()))
    }
}

/// Pixel extent of `chars` glyphs laid out in a row at `scale`, or `None`
/// when it does not fit in a `u32`.
pub fn text_extent(chars: usize, scale: u32) -> Option<(u32, u32)> {
    if chars == 0 {
        return Some((0, 0));
    }
    let n = u32::try_from(chars).ok()?;
    let w = n.checked_mul(GLYPH_WIDTH + GLYPH_SPACING)? - GLYPH_SPACING;
    Some((w.checked_mul(scale)?, GLYPH_HEIGHT.checked_mul(scale)?))
}

#[rustfmt::skip]
fn lookup(ch: char) -> Option<GlyphBitmap> {
    let rows = match ch {
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        _ => return None,
    };
    Some(rows)
}

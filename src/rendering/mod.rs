//! Icon rendering pipeline
//!
//! `layout` produces a display list from the configuration, `paint` defines
//! the commands in it and `raster` turns them into pixels on a `Canvas`.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use crate::config::{IconConfig, Rgba};
use font::{BitmapFont, GlyphRasterizer};
use image::RgbaImage;

/// Width and height of the icon in pixels
pub const ICON_SIZE: u32 = 128;

/// An RGBA pixel grid, fully transparent when created.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at (x, y). Panics when out of bounds, like indexing.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        (r, g, b, a)
    }

    /// Overwrite a pixel; coordinates outside the canvas are ignored.
    pub fn put(&mut self, x: i32, y: i32, (r, g, b, a): Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, image::Rgba([r, g, b, a]));
    }

    /// Raw RGBA bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Render the icon described by `config` with the built-in font.
pub fn render(config: &IconConfig) -> Canvas {
    render_with(config, &BitmapFont::new())
}

/// Render the icon, drawing the label through `glyphs`. A label the
/// rasterizer cannot draw is logged and left out; the rest of the icon is
/// unaffected.
pub fn render_with(config: &IconConfig, glyphs: &dyn GlyphRasterizer) -> Canvas {
    let commands = layout::layout_icon(config);
    log::debug!("Laid out {} paint commands", commands.len());
    let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE);
    raster::rasterize(&mut canvas, &commands, glyphs);
    canvas
}

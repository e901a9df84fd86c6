//! Rasterizer for the icon display list

use crate::config::Rgba;
use crate::rendering::font::{self, GlyphRasterizer};
use crate::rendering::paint::PaintCommand;
use crate::rendering::Canvas;
use crate::{Error, Result};

/// Draw every command onto `canvas` in order. Text that cannot be rasterized
/// is skipped with a warning.
pub fn rasterize(canvas: &mut Canvas, commands: &[PaintCommand], glyphs: &dyn GlyphRasterizer) {
    for cmd in commands {
        match cmd {
            PaintCommand::Disc { cx, cy, radius, rgba } => {
                fill_disc(canvas, *cx, *cy, *radius, *rgba)
            }
            PaintCommand::Ring { cx, cy, radius, width, rgba } => {
                stroke_ring(canvas, *cx, *cy, *radius, *width, *rgba)
            }
            PaintCommand::Line { from, to, width, rgba } => {
                stroke_line(canvas, *from, *to, *width, *rgba)
            }
            PaintCommand::Text { x, y, text, scale, rgba } => {
                if let Err(e) = draw_text(canvas, *x, *y, text, *scale, *rgba, glyphs) {
                    log::warn!("Skipping label {:?}: {}", text, e);
                }
            }
        }
    }
}

pub fn fill_disc(canvas: &mut Canvas, cx: i32, cy: i32, radius: u32, rgba: Rgba) {
    let r = radius as i32;
    let r2 = r * r;
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                canvas.put(x, y, rgba);
            }
        }
    }
}

/// Outline covering pixels whose distance from the center lies in
/// (radius - width, radius].
pub fn stroke_ring(canvas: &mut Canvas, cx: i32, cy: i32, radius: u32, width: u32, rgba: Rgba) {
    let r = radius as i32;
    let inner = r - width.min(radius) as i32;
    let (outer2, inner2) = (r * r, inner * inner);
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            let (dx, dy) = (x - cx, y - cy);
            let d2 = dx * dx + dy * dy;
            if d2 <= outer2 && d2 > inner2 {
                canvas.put(x, y, rgba);
            }
        }
    }
}

/// Segment of the given width: every pixel within `width / 2` of the
/// segment is covered.
pub fn stroke_line(canvas: &mut Canvas, from: (i32, i32), to: (i32, i32), width: u32, rgba: Rgba) {
    let half = width as f64 / 2.0;
    let pad = half.ceil() as i32;
    let (x0, x1) = (from.0.min(to.0) - pad, from.0.max(to.0) + pad);
    let (y0, y1) = (from.1.min(to.1) - pad, from.1.max(to.1) + pad);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if distance_to_segment((x, y), from, to) <= half {
                canvas.put(x, y, rgba);
            }
        }
    }
}

fn distance_to_segment(p: (i32, i32), a: (i32, i32), b: (i32, i32)) -> f64 {
    let (px, py) = (p.0 as f64, p.1 as f64);
    let (ax, ay) = (a.0 as f64, a.1 as f64);
    let (bx, by) = (b.0 as f64, b.1 as f64);
    let (dx, dy) = (bx - ax, by - ay);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
    };
    let (qx, qy) = (ax + t * dx, ay + t * dy);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

/// Draw `text` centered on (x, y). All glyphs are resolved before any pixel
/// is touched, so a failure leaves the canvas unchanged. Scaled glyph cells
/// are clipped to the canvas, so the cost is bounded by the canvas area.
pub fn draw_text(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    scale: u32,
    rgba: Rgba,
    glyphs: &dyn GlyphRasterizer,
) -> Result<()> {
    let bitmaps = glyphs.layout(text)?;
    let (w, h) = font::text_extent(bitmaps.len(), scale).ok_or_else(|| {
        Error::GlyphError(format!("label {:?} at scale {} is too large", text, scale))
    })?;
    let s = i64::from(scale);
    let left = i64::from(x) - i64::from(w / 2);
    let top = i64::from(y) - i64::from(h / 2);
    let advance = i64::from(font::GLYPH_WIDTH + font::GLYPH_SPACING) * s;
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));

    for (i, rows) in bitmaps.iter().enumerate() {
        let gx = left + i as i64 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..font::GLYPH_WIDTH {
                if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = gx + i64::from(col) * s;
                let py = top + row as i64 * s;
                for cy in py.max(0)..(py + s).min(ch) {
                    for cx in px.max(0)..(px + s).min(cw) {
                        canvas.put(cx as i32, cy as i32, rgba);
                    }
                }
            }
        }
    }
    Ok(())
}

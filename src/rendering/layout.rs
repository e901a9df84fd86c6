//! Icon layout: turns an `IconConfig` into an ordered display list

use crate::config::{IconConfig, Palette, Rgba};
use crate::rendering::paint::PaintCommand;
use crate::rendering::ICON_SIZE;

pub const CENTER: i32 = (ICON_SIZE / 2) as i32;
/// Radius of the gradient disc and its border
pub const DISC_RADIUS: u32 = 60;
const GRADIENT_STEP: usize = 2;
const BORDER_WIDTH: u32 = 2;

/// Bullseye layers, outermost first: (radius, stroke width); width 0 means filled.
const BULLSEYE: [(u32, u32); 3] = [(25, 3), (15, 2), (5, 0)];

/// Chevron tip distance from center, wing spread and depth
const CHEVRON_TIP: i32 = 39;
const CHEVRON_SPREAD: i32 = 11;
const CHEVRON_DEPTH: i32 = 9;
const CHEVRON_WIDTH: u32 = 2;

/// Corner dots sit this far in from each canvas edge
pub const DOT_INSET: i32 = 25;
const DOT_RADIUS: u32 = 3;

/// Compute the full display list for the icon, in paint order.
pub fn layout_icon(config: &IconConfig) -> Vec<PaintCommand> {
    let palette = &config.palette;
    let fg = palette.foreground_rgba();
    let mut cmds = gradient_discs(palette);

    cmds.push(PaintCommand::Ring {
        cx: CENTER,
        cy: CENTER,
        radius: DISC_RADIUS,
        width: BORDER_WIDTH,
        rgba: palette.border_rgba(),
    });

    for (radius, width) in BULLSEYE {
        cmds.push(if width == 0 {
            PaintCommand::Disc { cx: CENTER, cy: CENTER, radius, rgba: fg }
        } else {
            PaintCommand::Ring { cx: CENTER, cy: CENTER, radius, width, rgba: fg }
        });
    }

    for (from, to) in chevron_segments() {
        cmds.push(PaintCommand::Line { from, to, width: CHEVRON_WIDTH, rgba: fg });
    }

    for (cx, cy) in corner_dots() {
        cmds.push(PaintCommand::Disc { cx, cy, radius: DOT_RADIUS, rgba: fg });
    }

    let glyph = &config.glyph;
    if glyph.enabled && !glyph.text.is_empty() {
        cmds.push(PaintCommand::Text {
            x: CENTER,
            y: CENTER.saturating_add(glyph.offset_y),
            text: glyph.text.clone(),
            scale: glyph.scale,
            rgba: fg,
        });
    }

    cmds
}

/// Nested discs from the outer radius inward, stepping by two pixels. Each
/// inner disc overpaints the previous one, approximating a radial gradient
/// from `background` at the rim to `accent` near the middle.
pub fn gradient_discs(palette: &Palette) -> Vec<PaintCommand> {
    (GRADIENT_STEP as u32..=DISC_RADIUS)
        .rev()
        .step_by(GRADIENT_STEP)
        .map(|radius| PaintCommand::Disc {
            cx: CENTER,
            cy: CENTER,
            radius,
            rgba: gradient_color(palette, radius),
        })
        .collect()
}

/// Color of the gradient disc of the given radius.
pub fn gradient_color(palette: &Palette, radius: u32) -> Rgba {
    let t = (DISC_RADIUS as f64 - radius as f64) / DISC_RADIUS as f64;
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
    let [br, bg, bb] = palette.background;
    let [ar, ag, ab] = palette.accent;
    let alpha = (255.0 * (0.8 + 0.2 * t)) as u8;
    (mix(br, ar), mix(bg, ag), mix(bb, ab), alpha)
}

/// Eight segments, two per cardinal direction, each running from a tip near
/// the rim back toward the center to form an outward-pointing chevron.
pub fn chevron_segments() -> Vec<((i32, i32), (i32, i32))> {
    // (dx, dy) unit direction of each tip
    let dirs = [(0, -1), (1, 0), (0, 1), (-1, 0)];
    let back = CHEVRON_TIP - CHEVRON_DEPTH;
    let mut segs = Vec::with_capacity(8);
    for (dx, dy) in dirs {
        let tip = (CENTER + dx * CHEVRON_TIP, CENTER + dy * CHEVRON_TIP);
        // Perpendicular to the direction
        let (px, py) = (dy.abs(), dx.abs());
        for side in [-1, 1] {
            let wing = (
                CENTER + dx * back + px * side * CHEVRON_SPREAD,
                CENTER + dy * back + py * side * CHEVRON_SPREAD,
            );
            segs.push((tip, wing));
        }
    }
    segs
}

/// Centers of the four corner dots.
pub fn corner_dots() -> [(i32, i32); 4] {
    let far = ICON_SIZE as i32 - DOT_INSET;
    [
        (DOT_INSET, DOT_INSET),
        (far, DOT_INSET),
        (DOT_INSET, far),
        (far, far),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_outer_to_inner() {
        let discs = gradient_discs(&Palette::default());
        assert_eq!(discs.len(), 30);
        match (&discs[0], &discs[29]) {
            (PaintCommand::Disc { radius: first, .. }, PaintCommand::Disc { radius: last, .. }) => {
                assert_eq!(*first, 60);
                assert_eq!(*last, 2);
            }
            _ => panic!("expected discs"),
        }
    }

    #[test]
    fn gradient_endpoints() {
        let p = Palette::default();
        assert_eq!(gradient_color(&p, 60), (102, 126, 234, 204));
        // t = 58/60 at the innermost disc
        let (r, g, b, a) = gradient_color(&p, 2);
        assert_eq!((r, g, b), (117, 76, 164));
        assert_eq!(a, 253);
    }

    #[test]
    fn chevrons_match_reference_points() {
        let segs = chevron_segments();
        assert_eq!(segs.len(), 8);
        assert_eq!(segs[0], ((64, 25), (53, 34)));
        assert_eq!(segs[1], ((64, 25), (75, 34)));
        assert_eq!(segs[2], ((103, 64), (94, 53)));
        assert_eq!(segs[3], ((103, 64), (94, 75)));
        assert_eq!(segs[4], ((64, 103), (53, 94)));
        assert_eq!(segs[7], ((25, 64), (34, 75)));
    }

    #[test]
    fn corner_dots_are_inset() {
        assert_eq!(corner_dots(), [(25, 25), (103, 25), (25, 103), (103, 103)]);
    }

    #[test]
    fn label_follows_config() {
        let mut cfg = IconConfig::default();
        let cmds = layout_icon(&cfg);
        match cmds.last() {
            Some(PaintCommand::Text { x, y, text, .. }) => {
                assert_eq!((*x, *y), (64, 72));
                assert_eq!(text, "Q");
            }
            other => panic!("expected label last, got {:?}", other),
        }

        cfg.glyph.enabled = false;
        let cmds = layout_icon(&cfg);
        assert!(cmds.iter().all(|c| c.kind() != "text"));
        // 30 gradient + border + 3 bullseye + 8 chevrons + 4 dots
        assert_eq!(cmds.len(), 46);
    }

    #[test]
    fn extreme_offset_saturates() {
        let mut cfg = IconConfig::default();
        cfg.glyph.offset_y = i32::MAX;
        match layout_icon(&cfg).last() {
            Some(PaintCommand::Text { y, .. }) => assert_eq!(*y, i32::MAX),
            other => panic!("expected label last, got {:?}", other),
        }
    }
}

//! Paint command set for the icon display list

use crate::config::Rgba;

/// One drawing operation. Commands are rasterized in order and each one
/// overwrites the pixels it covers; there is no alpha blending.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Filled circle
    Disc {
        cx: i32,
        cy: i32,
        radius: u32,
        rgba: Rgba,
    },
    /// Circle outline, `width` pixels thick measured inward from `radius`
    Ring {
        cx: i32,
        cy: i32,
        radius: u32,
        width: u32,
        rgba: Rgba,
    },
    /// Straight segment with round caps
    Line {
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        rgba: Rgba,
    },
    /// Text anchored at its middle (horizontal and vertical)
    Text {
        x: i32,
        y: i32,
        text: String,
        scale: u32,
        rgba: Rgba,
    },
}

impl PaintCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            PaintCommand::Disc { .. } => "disc",
            PaintCommand::Ring { .. } => "ring",
            PaintCommand::Line { .. } => "line",
            PaintCommand::Text { .. } => "text",
        }
    }
}

//! Icon configuration
//!
//! Every constant the renderer and exporter depend on lives here. The
//! defaults reproduce the stock quest icon exactly, so `IconConfig::default()`
//! is what the CLI renders when no config file is given.

use crate::rendering::font::{text_extent, GLYPH_HEIGHT};
use crate::rendering::ICON_SIZE;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// An RGBA color, one byte per channel
pub type Rgba = (u8, u8, u8, u8);

/// Where the icon is written when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "images/icon.png";

/// Top-level configuration for rendering and exporting the icon
///
/// Deserialization is lenient: any key missing from a JSON file keeps its
/// default value.
///
/// # Examples
///
/// ```
/// let cfg = questicon::IconConfig::default();
/// assert_eq!(cfg.glyph.text, "Q");
/// assert_eq!(cfg.palette.background, [102, 126, 234]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Destination of the encoded PNG
    pub output: PathBuf,
    /// Colors used by every layer of the icon
    pub palette: Palette,
    /// Label drawn below the bullseye
    pub glyph: GlyphConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            palette: Palette::default(),
            glyph: GlyphConfig::default(),
        }
    }
}

impl IconConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let cfg = Self::from_json_str(&raw)?;
        log::debug!("Loaded icon config from {}", path.display());
        Ok(cfg)
    }

    /// Parse a configuration from a JSON document and validate it.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: IconConfig =
            serde_json::from_str(raw).map_err(|e| Error::ConfigError(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations that cannot produce a sensible icon: an empty
    /// output path, or a label that cannot fit on the canvas.
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(Error::ConfigError("output path is empty".into()));
        }
        let glyph = &self.glyph;
        let max_scale = ICON_SIZE / GLYPH_HEIGHT;
        if glyph.scale == 0 || glyph.scale > max_scale {
            return Err(Error::ConfigError(format!(
                "glyph.scale must be between 1 and {}, got {}",
                max_scale, glyph.scale
            )));
        }
        if glyph.offset_y.unsigned_abs() > ICON_SIZE {
            return Err(Error::ConfigError(format!(
                "glyph.offset_y must be within ±{}, got {}",
                ICON_SIZE, glyph.offset_y
            )));
        }
        match text_extent(glyph.text.chars().count(), glyph.scale) {
            Some((w, _)) if w <= ICON_SIZE => Ok(()),
            _ => Err(Error::ConfigError(format!(
                "glyph.text {:?} at scale {} is wider than the {}px icon",
                glyph.text, glyph.scale, ICON_SIZE
            ))),
        }
    }
}

/// Icon color palette, RGB triples
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Outer gradient color (#667EEA)
    pub background: [u8; 3],
    /// Inner gradient color (#764BA2)
    pub accent: [u8; 3],
    /// Outline around the gradient disc
    pub border: [u8; 3],
    /// Bullseye, chevrons, corner dots and label
    pub foreground: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [102, 126, 234],
            accent: [118, 75, 162],
            border: [79, 70, 229],
            foreground: [255, 255, 255],
        }
    }
}

impl Palette {
    pub fn border_rgba(&self) -> Rgba {
        opaque(self.border)
    }

    pub fn foreground_rgba(&self) -> Rgba {
        opaque(self.foreground)
    }
}

fn opaque([r, g, b]: [u8; 3]) -> Rgba {
    (r, g, b, 255)
}

/// Settings for the text label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Skip the label entirely when false
    pub enabled: bool,
    /// Characters to draw; the built-in font covers A-Z, 0-9 and space
    pub text: String,
    /// Vertical offset of the label's middle from the icon center
    pub offset_y: i32,
    /// Integer pixel scale applied to each glyph cell
    pub scale: u32,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            text: "Q".to_string(),
            offset_y: 8,
            scale: 1,
        }
    }
}

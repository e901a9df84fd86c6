//! Quest icon generator
//!
//! Procedurally draws a 128x128 RGBA icon (a radial gradient disc with a
//! border, a bullseye, four outward chevrons, corner dots and a "Q" label) and
//! writes it to disk as PNG.
//!
//! Rendering never fails: the label is drawn on a best-effort basis and is
//! skipped, with a warning, when no glyph is available. Only export touches
//! the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use questicon::IconConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig::default();
//! let canvas = questicon::render(&config);
//! let summary = questicon::export(&canvas, &config.output)?;
//! println!("Created {}", summary.path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod rendering;

pub use config::{GlyphConfig, IconConfig, Palette, Rgba};
pub use error::{Error, Result};
pub use export::{encode_png, export, ExportSummary};
pub use rendering::{render, render_with, Canvas, ICON_SIZE};

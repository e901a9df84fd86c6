//! Error types for icon rendering and export

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rendering and export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, rendering or writing an icon
#[derive(Error, Debug)]
pub enum Error {
    /// The glyph rasterizer has no bitmap for this character
    #[error("No glyph available for {0:?}")]
    MissingGlyph(char),

    /// The glyph rasterizer failed for another reason
    #[error("Glyph rendering failed: {0}")]
    GlyphError(String),

    /// Failed to encode the canvas as PNG
    #[error("PNG encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),

    /// Failed to read or write a file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

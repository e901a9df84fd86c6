//! PNG export

use crate::rendering::Canvas;
use crate::{Error, Result};
use image::ImageFormat;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// What was written by `export`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// Size of the encoded PNG in bytes
    pub bytes: usize,
    /// Hex SHA-256 of the encoded PNG
    pub sha256: String,
}

/// Encode the canvas as an RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    canvas.image().write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Encode the canvas and write it to `path`, creating missing parent
/// directories. Fails with `Error::Io` when the destination is not writable.
pub fn export(canvas: &Canvas, path: impl AsRef<Path>) -> Result<ExportSummary> {
    let path = path.as_ref();
    let png = encode_png(canvas)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, &png).map_err(|e| Error::io(path, e))?;

    let summary = ExportSummary {
        path: path.to_path_buf(),
        bytes: png.len(),
        sha256: hex::encode(Sha256::digest(&png)),
    };
    log::info!(
        "Wrote {} ({} bytes, sha256 {})",
        summary.path.display(),
        summary.bytes,
        summary.sha256
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_png_has_signature() {
        let png = encode_png(&Canvas::new(8, 8)).unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn export_into_file_parent_fails() {
        let dir = std::env::temp_dir().join(format!("questicon-export-unit-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let err = export(&Canvas::new(2, 2), blocker.join("icon.png")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }
}

//! Writing rendered canvases out as PNG.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::{Error, Result};

/// File name of the live preview.
pub const PREVIEW_FILE_NAME: &str = "aesthetic_quote_preview.png";

/// File name used for downloads.
pub const DOWNLOAD_FILE_NAME: &str = "aesthetic_quote.png";

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn save_png(canvas: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    canvas.save_with_format(path, ImageFormat::Png)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Writes the preview image into `dir`, replacing any previous preview.
pub fn save_preview(canvas: &RgbaImage, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(PREVIEW_FILE_NAME);
    save_png(canvas, &path)?;
    Ok(path)
}

/// The user's Downloads directory.
pub fn downloads_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
}

/// Saves the canvas as [`DOWNLOAD_FILE_NAME`] inside `dir`, creating the
/// directory when needed.
pub fn save_download_to(canvas: &RgbaImage, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let path = dir.join(DOWNLOAD_FILE_NAME);
    save_png(canvas, &path)?;
    Ok(path)
}

/// Saves the canvas into the user's Downloads directory.
pub fn save_download(canvas: &RgbaImage) -> Result<PathBuf> {
    let dir = downloads_dir().ok_or_else(|| {
        Error::io(
            "Downloads",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no home directory"),
        )
    })?;
    save_download_to(canvas, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn canvas() -> RgbaImage {
        RgbaImage::from_pixel(8, 4, Rgba([30, 60, 90, 255]))
    }

    #[test]
    fn encodes_png_signature() {
        let bytes = encode_png(&canvas()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn preview_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_preview(&canvas(), dir.path()).unwrap();
        assert_eq!(path, dir.path().join(PREVIEW_FILE_NAME));

        let loaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(loaded, canvas());
    }

    #[test]
    fn download_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Downloads");
        let path = save_download_to(&canvas(), &target).unwrap();
        assert_eq!(path, target.join(DOWNLOAD_FILE_NAME));
        assert!(path.is_file());
    }
}

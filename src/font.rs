use std::path::Path;

use ab_glyph::{FontArc, PxScale, PxScaleFont};

use crate::error::FontError;

/// Supported point sizes for quote text.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 20.0..=80.0;

/// Point size used when none is chosen.
pub const DEFAULT_FONT_SIZE: f32 = 40.0;

pub fn load_font_from_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FontError> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// A parsed font at a fixed pixel size.
///
/// Construction validates both the font data and the size, so holding a
/// `Typeface` means glyph metrics are available.
#[derive(Clone)]
pub struct Typeface {
    font: FontArc,
    px_size: f32,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("px_size", &self.px_size)
            .finish_non_exhaustive()
    }
}

impl Typeface {
    /// Parses `font_data` (TTF/OTF) for drawing at `px_size` pixels.
    pub fn new(font_data: Vec<u8>, px_size: f32) -> Result<Self, FontError> {
        if !px_size.is_finite() || px_size <= 0.0 {
            return Err(FontError::InvalidSize(px_size));
        }
        let font = FontArc::try_from_vec(font_data).map_err(|e| FontError::Parse(e.to_string()))?;
        log::debug!("parsed font at {px_size}px");
        Ok(Self { font, px_size })
    }

    /// Reads and parses the font file at `path`.
    pub fn open(path: impl AsRef<Path>, px_size: f32) -> Result<Self, FontError> {
        let data = load_font_from_file(path)?;
        Self::new(data, px_size)
    }

    pub fn px_size(&self) -> f32 {
        self.px_size
    }

    pub fn scale(&self) -> PxScale {
        PxScale::from(self.px_size)
    }

    pub fn scaled(&self) -> PxScaleFont<&FontArc> {
        use ab_glyph::Font as _;
        self.font.as_scaled(self.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_data() {
        let err = Typeface::new(b"definitely not a font".to_vec(), 40.0).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn rejects_bad_sizes_before_parsing() {
        for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
            let err = Typeface::new(Vec::new(), size).unwrap_err();
            assert!(matches!(err, FontError::InvalidSize(_)));
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Typeface::open("/nonexistent/quoteforge/font.ttf", 40.0).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
    }

    #[test]
    fn default_size_is_in_range() {
        assert!(FONT_SIZE_RANGE.contains(&DEFAULT_FONT_SIZE));
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Font resolution errors.
///
/// Raised before any pixel is touched, so a failed font never leaves a
/// half-drawn canvas behind.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font: {0}")]
    Parse(String),

    #[error("invalid font size: {0}")]
    InvalidSize(f32),
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error("font size {size} is outside the supported range {min}..={max}")]
    FontSizeOutOfRange { size: f32, min: f32, max: f32 },

    #[error("quote is empty")]
    EmptyQuote,

    #[error("no {kind} found in {}", dir.display())]
    NoAssets { kind: &'static str, dir: PathBuf },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the failure came from resolving the font.
    pub fn is_font_error(&self) -> bool {
        matches!(self, Error::Font(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

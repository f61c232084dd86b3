//! Quoteforge - render quotes as centered, shadowed text on background images.
//!
//! # Example
//! ```no_run
//! use quoteforge::{RenderRequest, font, graphics};
//!
//! fn main() -> quoteforge::Result<()> {
//!     let mut canvas = graphics::open_canvas("assets/sunset.jpg")?;
//!     let font_data = font::load_font_from_file("fonts/DejaVuSans.ttf")?;
//!
//!     let request = RenderRequest::new("Stars can't shine without darkness.", font_data)
//!         .with_font_size(48.0);
//!     quoteforge::render(&mut canvas, &request)?;
//!
//!     quoteforge::export::save_png(&canvas, "quote.png")
//! }
//! ```

pub mod assets;
mod error;
pub mod export;
pub mod font;
pub mod graphics;
pub mod quotes;
mod session;
mod text;

use std::path::PathBuf;
use std::time::Duration;

use image::RgbaImage;

pub use error::{Error, FontError, Result};
pub use font::{DEFAULT_FONT_SIZE, FONT_SIZE_RANGE, Typeface};
pub use graphics::TextStyle;
pub use session::{QuoteMode, Session};
pub use text::{DEFAULT_WRAP_WIDTH, join_lines, wrap, wrap_joined};

/// Settings shared by every render in a session.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    /// Folder holding background images.
    pub assets_dir: PathBuf,
    /// Folder holding `.ttf` fonts.
    pub fonts_dir: PathBuf,
    pub wrap_width: usize,
    pub style: TextStyle,
    /// How long the intro banner stays up at session start.
    pub intro_delay: Duration,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            fonts_dir: PathBuf::from("fonts"),
            wrap_width: DEFAULT_WRAP_WIDTH,
            style: TextStyle::default(),
            intro_delay: Duration::from_secs(2),
        }
    }
}

/// Everything one render needs, built fresh for each interaction.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    quote: String,
    font_data: Vec<u8>,
    font_size: f32,
    wrap_width: usize,
    style: TextStyle,
}

impl RenderRequest {
    pub fn new(quote: impl Into<String>, font_data: Vec<u8>) -> Self {
        Self {
            quote: quote.into(),
            font_data,
            font_size: DEFAULT_FONT_SIZE,
            wrap_width: DEFAULT_WRAP_WIDTH,
            style: TextStyle::default(),
        }
    }

    /// Starts a request with the wrap width and style from `config`.
    pub fn from_config(config: &ForgeConfig, quote: impl Into<String>, font_data: Vec<u8>) -> Self {
        Self::new(quote, font_data)
            .with_wrap_width(config.wrap_width)
            .with_style(config.style)
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width.max(1);
        self
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks the preconditions a render relies on.
    pub fn validate(&self) -> Result<()> {
        if self.quote.trim().is_empty() {
            return Err(Error::EmptyQuote);
        }
        if !FONT_SIZE_RANGE.contains(&self.font_size) {
            return Err(Error::FontSizeOutOfRange {
                size: self.font_size,
                min: *FONT_SIZE_RANGE.start(),
                max: *FONT_SIZE_RANGE.end(),
            });
        }
        Ok(())
    }

    /// The quote wrapped and joined the way it will be drawn.
    pub fn wrapped_text(&self) -> String {
        wrap_joined(self.quote.trim(), self.wrap_width)
    }
}

/// Renders `request` onto `canvas` in place.
///
/// The font is resolved before anything is drawn, so on error the canvas is
/// left exactly as it was. Returns the top-left origin of the text block.
pub fn render(canvas: &mut RgbaImage, request: &RenderRequest) -> Result<[i32; 2]> {
    request.validate()?;
    let typeface = Typeface::new(request.font_data.clone(), request.font_size)?;
    let wrapped = request.wrapped_text();
    log::info!(
        "rendering {} chars at {}px onto {}x{}",
        request.quote.len(),
        request.font_size,
        canvas.width(),
        canvas.height()
    );
    Ok(graphics::composite(
        canvas,
        &wrapped,
        &typeface,
        &request.style,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn request_defaults() {
        let request = RenderRequest::new("hello", Vec::new());
        assert_eq!(request.font_size(), DEFAULT_FONT_SIZE);
        assert_eq!(request.wrap_width(), DEFAULT_WRAP_WIDTH);
        assert_eq!(request.style(), &TextStyle::default());
    }

    #[test]
    fn request_from_config_copies_layout_settings() {
        let config = ForgeConfig {
            wrap_width: 12,
            style: TextStyle::default().with_shadow_offset([4, 4]),
            ..ForgeConfig::default()
        };
        let request = RenderRequest::from_config(&config, "hello", Vec::new());
        assert_eq!(request.wrap_width(), 12);
        assert_eq!(request.style().shadow_offset(), [4, 4]);
    }

    #[test]
    fn blank_quote_is_rejected_before_font_parsing() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let request = RenderRequest::new("   ", b"junk".to_vec());
        assert!(matches!(
            render(&mut canvas, &request),
            Err(Error::EmptyQuote)
        ));
    }

    #[test]
    fn font_size_must_be_in_range() {
        for size in [19.0, 81.0, f32::NAN] {
            let request = RenderRequest::new("hello", Vec::new()).with_font_size(size);
            assert!(matches!(
                request.validate(),
                Err(Error::FontSizeOutOfRange { .. })
            ));
        }
        for size in [20.0, 40.0, 80.0] {
            let request = RenderRequest::new("hello", Vec::new()).with_font_size(size);
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn corrupt_font_leaves_canvas_untouched() {
        let original = RgbaImage::from_pixel(64, 32, Rgba([40, 80, 120, 255]));
        let mut canvas = original.clone();
        let request = RenderRequest::new("hello world", b"not a font at all".to_vec());

        let err = render(&mut canvas, &request).unwrap_err();
        assert!(err.is_font_error());
        assert!(matches!(err, Error::Font(FontError::Parse(_))));
        assert_eq!(canvas, original);
    }

    #[test]
    fn wrapped_text_trims_and_wraps() {
        let request = RenderRequest::new("  a b c d  ", Vec::new()).with_wrap_width(3);
        assert_eq!(request.wrapped_text(), "a b \nc d ");
    }
}

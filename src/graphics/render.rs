//! Drawing laid out text onto a canvas.

use image::{Rgba, RgbaImage};

use super::image_ops::blend_pixel;
use super::layout::{TextLayout, centered_origin};
use crate::font::Typeface;

/// Colors and shadow placement for quote text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    fill: Rgba<u8>,
    shadow: Rgba<u8>,
    shadow_offset: [i32; 2],
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: Rgba([255, 255, 255, 255]),
            shadow: Rgba([0, 0, 0, 120]),
            shadow_offset: [2, 2],
        }
    }
}

impl TextStyle {
    pub fn new(fill: Rgba<u8>, shadow: Rgba<u8>, shadow_offset: [i32; 2]) -> Self {
        Self {
            fill,
            shadow,
            shadow_offset,
        }
    }

    pub fn fill(&self) -> Rgba<u8> {
        self.fill
    }

    pub fn with_fill(mut self, fill: Rgba<u8>) -> Self {
        self.fill = fill;
        self
    }

    pub fn shadow(&self) -> Rgba<u8> {
        self.shadow
    }

    pub fn with_shadow(mut self, shadow: Rgba<u8>) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn shadow_offset(&self) -> [i32; 2] {
        self.shadow_offset
    }

    pub fn with_shadow_offset(mut self, shadow_offset: [i32; 2]) -> Self {
        self.shadow_offset = shadow_offset;
        self
    }
}

/// Draws `wrapped_text` centered on `canvas`: a shadow pass, then the fill
/// pass on top of it.
///
/// Returns the top-left origin the block was centered at. Pixels that fall
/// outside the canvas are dropped.
pub fn composite(
    canvas: &mut RgbaImage,
    wrapped_text: &str,
    typeface: &Typeface,
    style: &TextStyle,
) -> [i32; 2] {
    let layout = TextLayout::new(wrapped_text, typeface);
    let bounds = layout.bounds();
    let origin = centered_origin(canvas.dimensions(), &bounds);
    log::debug!(
        "text block {}x{} over {} lines, origin ({}, {})",
        bounds.width(),
        bounds.height(),
        layout.line_count(),
        origin[0],
        origin[1]
    );

    // Shadow first so the fill stays legible on top.
    let [dx, dy] = style.shadow_offset;
    draw_layout(
        canvas,
        &layout,
        [origin[0] + dx, origin[1] + dy],
        style.shadow,
    );
    draw_layout(canvas, &layout, origin, style.fill);

    origin
}

/// Rasterizes every glyph of `layout` with its origin at `origin`.
pub fn draw_layout(
    canvas: &mut RgbaImage,
    layout: &TextLayout,
    origin: [i32; 2],
    color: Rgba<u8>,
) {
    let (width, height) = canvas.dimensions();

    for glyph in layout.glyphs() {
        let b = glyph.px_bounds();
        let gx = origin[0] + b.min.x as i32;
        let gy = origin[1] + b.min.y as i32;

        glyph.draw(|x, y, coverage| {
            let px = gx + x as i32;
            let py = gy + y as i32;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= width || py >= height {
                return;
            }
            blend_pixel(canvas.get_pixel_mut(px, py), color, coverage);
        });
    }
}

//! Multi-line text layout and measurement.

use ab_glyph::{Glyph, GlyphId, OutlinedGlyph, PxScaleFont, ScaleFont as _, point};

use crate::font::Typeface;

/// Whole-pixel bounding box of laid out text, relative to the layout origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Newline separated text laid out as a center-aligned block.
///
/// The origin is the top-left corner of the block. The first baseline sits
/// `ascent` below it and each following line advances by the font's line
/// height. Lines narrower than the widest one are centered within it.
///
/// Vertically the bounds cover the glyph ink, plus the full line box of any
/// line that has no ink at all (such as a blank first line).
pub struct TextLayout {
    glyphs: Vec<OutlinedGlyph>,
    bounds: TextBounds,
    line_count: usize,
}

impl TextLayout {
    pub fn new(text: &str, typeface: &Typeface) -> Self {
        let scaled = typeface.scaled();
        let scale = typeface.scale();

        let lines: Vec<&str> = text.split('\n').collect();
        let widths: Vec<f32> = lines
            .iter()
            .map(|line| measure_line_width(line, &scaled))
            .collect();
        let block_width = widths.iter().copied().fold(0.0f32, f32::max);

        let ascent = scaled.ascent();
        let descent = scaled.descent();
        let line_height = ascent - descent + scaled.line_gap();

        let mut glyphs = Vec::new();
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut span_y: Option<(f32, f32)> = None;

        for (i, (line, width)) in lines.iter().zip(&widths).enumerate() {
            let line_x = (block_width - width) / 2.0;
            let baseline_y = ascent + i as f32 * line_height;
            min_x = min_x.min(line_x);
            max_x = max_x.max(line_x + width);

            let mut caret = line_x;
            let mut prev: Option<GlyphId> = None;
            let mut line_has_ink = false;
            for ch in line.chars() {
                let id = scaled.glyph_id(ch);
                if let Some(p) = prev {
                    caret += scaled.kern(p, id);
                }
                prev = Some(id);

                let glyph = Glyph {
                    id,
                    scale,
                    position: point(caret, baseline_y),
                };
                // Whitespace has no outline, only an advance.
                if let Some(outlined) = scaled.outline_glyph(glyph) {
                    let b = outlined.px_bounds();
                    min_x = min_x.min(b.min.x);
                    max_x = max_x.max(b.max.x);
                    span_y = Some(union_span(span_y, b.min.y, b.max.y));
                    line_has_ink = true;
                    glyphs.push(outlined);
                }
                caret += scaled.h_advance(id);
            }

            // Blank lines still take up their line box.
            if !line_has_ink {
                span_y = Some(union_span(span_y, baseline_y - ascent, baseline_y - descent));
            }
        }

        let (top, bottom) = span_y.unwrap_or((0.0, 0.0));

        let bounds = TextBounds {
            left: min_x.floor() as i32,
            top: top.floor() as i32,
            right: max_x.ceil() as i32,
            bottom: bottom.ceil() as i32,
        };
        log::trace!(
            "laid out {} lines, {} glyphs, bounds {:?}",
            lines.len(),
            glyphs.len(),
            bounds
        );

        Self {
            glyphs,
            bounds,
            line_count: lines.len(),
        }
    }

    pub fn bounds(&self) -> TextBounds {
        self.bounds
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Glyphs with an outline, in reading order.
    pub(crate) fn glyphs(&self) -> &[OutlinedGlyph] {
        &self.glyphs
    }
}

fn union_span(span: Option<(f32, f32)>, top: f32, bottom: f32) -> (f32, f32) {
    match span {
        Some((t, b)) => (t.min(top), b.max(bottom)),
        None => (top, bottom),
    }
}

/// Measures the bounding box of `text` laid out at the origin.
pub fn measure_multiline(text: &str, typeface: &Typeface) -> TextBounds {
    TextLayout::new(text, typeface).bounds()
}

/// Advance width of a single line, kerning included.
pub fn measure_line_width<F: ab_glyph::Font>(line: &str, scaled: &PxScaleFont<F>) -> f32 {
    let mut width = 0.0f32;
    let mut prev: Option<GlyphId> = None;

    for ch in line.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            width += scaled.kern(p, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }

    width
}

/// Top-left origin that centers a block of `bounds` size on a canvas.
///
/// Uses floor division, so an oversized block gets a negative origin and
/// overflows evenly on both sides.
pub fn centered_origin(canvas_size: (u32, u32), bounds: &TextBounds) -> [i32; 2] {
    let canvas_w = i64::from(canvas_size.0);
    let canvas_h = i64::from(canvas_size.1);
    let x = (canvas_w - i64::from(bounds.width())).div_euclid(2);
    let y = (canvas_h - i64::from(bounds.height())).div_euclid(2);
    [clamp_i32(x), clamp_i32(y)]
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(width: i32, height: i32) -> TextBounds {
        TextBounds {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    #[test]
    fn centers_block_inside_canvas() {
        for (w, h) in [(800u32, 600u32), (1080, 1920), (31, 17), (1, 1)] {
            for (tw, th) in [(0, 0), (1, 1), (30, 16), (31, 17), (200, 90)] {
                if tw > w as i32 || th > h as i32 {
                    continue;
                }
                let [x, y] = centered_origin((w, h), &bounds(tw, th));
                assert!(x >= 0 && y >= 0);
                assert!(x + tw <= w as i32, "x = {x}, tw = {tw}, w = {w}");
                assert!(y + th <= h as i32, "y = {y}, th = {th}, h = {h}");
                // Left and right margins differ by at most one pixel.
                assert!(((w as i32 - x - tw) - x).abs() <= 1);
                assert!(((h as i32 - y - th) - y).abs() <= 1);
            }
        }
    }

    #[test]
    fn uses_floor_division() {
        assert_eq!(centered_origin((101, 51), &bounds(10, 10)), [45, 20]);
    }

    #[test]
    fn oversized_block_gets_negative_origin() {
        assert_eq!(centered_origin((100, 100), &bounds(151, 120)), [-26, -10]);
    }

    #[test]
    fn bounds_use_edges() {
        let b = TextBounds {
            left: -2,
            top: 5,
            right: 40,
            bottom: 25,
        };
        assert_eq!(b.width(), 42);
        assert_eq!(b.height(), 20);
    }
}

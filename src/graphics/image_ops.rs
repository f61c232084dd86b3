//! Canvas loading and per-pixel blending.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::Result;

/// Decodes a background image (PNG or JPEG) into an RGBA canvas.
pub fn open_canvas(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let canvas = image::open(path)?.into_rgba8();
    log::debug!(
        "loaded canvas {} ({}x{})",
        path.display(),
        canvas.width(),
        canvas.height()
    );
    Ok(canvas)
}

/// Source-over blends `color` onto `dst`, with the color's alpha scaled by
/// glyph `coverage` in `0.0..=1.0`.
pub(crate) fn blend_pixel(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let src_a = f32::from(color.0[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    let dst_a = f32::from(dst.0[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    for i in 0..3 {
        let src_c = f32::from(color.0[i]) / 255.0;
        let dst_c = f32::from(dst.0[i]) / 255.0;
        let out_c = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
        dst.0[i] = to_channel(out_c);
    }
    dst.0[3] = to_channel(out_a);
}

fn to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

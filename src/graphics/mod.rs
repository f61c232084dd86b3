//! Graphics module - text layout, compositing, and canvas helpers.

mod image_ops;
pub mod layout;
mod render;

pub use image_ops::open_canvas;
pub use layout::{TextBounds, TextLayout, centered_origin, measure_multiline};
pub use render::{TextStyle, composite, draw_layout};

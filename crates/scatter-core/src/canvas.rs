// File: crates/scatter-core/src/canvas.rs
// Summary: Small drawing helpers (dot, tagged dot, text, framed rectangle) over any Surface.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::surface::{Surface, TextSpec};

/// Filled circle of `radius` centred on `(x, y)`.
pub fn dot<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, radius: i32, fill: skia::Color) {
    surface.fill_oval(RectI32::around(x, y, radius), fill);
}

/// Dot followed by `tag` written from its centre.
#[allow(clippy::too_many_arguments)]
pub fn tag_dot<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    tag: &str,
    radius: i32,
    fill: skia::Color,
    text_size: f32,
    text_color: skia::Color,
) {
    dot(surface, x, y, radius, fill);
    text(surface, TextSpec::new(x, y, tag, text_size, text_color));
}

pub fn text<S: Surface + ?Sized>(surface: &mut S, spec: TextSpec) {
    surface.text(&spec);
}

/// Rectangle from its top-left corner and size.
pub fn rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
    fill: skia::Color,
    outline: skia::Color,
) {
    surface.rectangle(RectI32::from_ltwh(x0, y0, width, height), fill, outline);
}

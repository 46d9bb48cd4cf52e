// File: crates/scatter-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface trait plus a recording implementation.

use skia_safe as skia;

use crate::geometry::RectI32;

/// Which corner of the text's bounding box sits on the text origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    /// Counter-clockwise quarter turn about the text origin; reads bottom to top.
    Deg90,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub anchor: Anchor,
    pub rotation: Rotation,
    pub size: f32,
    pub bold: bool,
    pub color: skia::Color,
}

impl TextSpec {
    pub fn new(x: i32, y: i32, text: impl Into<String>, size: f32, color: skia::Color) -> Self {
        Self { x, y, text: text.into(), anchor: Anchor::NorthWest, rotation: Rotation::None, size, bold: false, color }
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Top-left corner of a `box_w` x `box_h` box placed so that its `anchor`
/// corner lands on `(x, y)`.
pub fn anchor_origin(anchor: Anchor, x: f32, y: f32, box_w: f32, box_h: f32) -> (f32, f32) {
    match anchor {
        Anchor::NorthWest => (x, y),
        Anchor::NorthEast => (x - box_w, y),
        Anchor::SouthWest => (x, y - box_h),
        Anchor::SouthEast => (x - box_w, y - box_h),
    }
}

/// Primitive draw operations the plots are built from.
pub trait Surface {
    /// Paint the whole surface with `color`.
    fn clear(&mut self, color: skia::Color);
    fn fill_oval(&mut self, bounds: RectI32, fill: skia::Color);
    fn rectangle(&mut self, rect: RectI32, fill: skia::Color, outline: skia::Color);
    fn text(&mut self, spec: &TextSpec);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { color: skia::Color },
    Oval { bounds: RectI32, fill: skia::Color },
    Rect { rect: RectI32, fill: skia::Color, outline: skia::Color },
    Text(TextSpec),
}

/// Surface that keeps every call instead of drawing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn ovals(&self) -> impl Iterator<Item = &RectI32> {
        self.ops.iter().filter_map(|op| match op { DrawOp::Oval { bounds, .. } => Some(bounds), _ => None })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectI32> {
        self.ops.iter().filter_map(|op| match op { DrawOp::Rect { rect, .. } => Some(rect), _ => None })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextSpec> {
        self.ops.iter().filter_map(|op| match op { DrawOp::Text(t) => Some(t), _ => None })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: skia::Color) {
        self.ops.push(DrawOp::Clear { color });
    }

    fn fill_oval(&mut self, bounds: RectI32, fill: skia::Color) {
        self.ops.push(DrawOp::Oval { bounds, fill });
    }

    fn rectangle(&mut self, rect: RectI32, fill: skia::Color, outline: skia::Color) {
        self.ops.push(DrawOp::Rect { rect, fill, outline });
    }

    fn text(&mut self, spec: &TextSpec) {
        self.ops.push(DrawOp::Text(spec.clone()));
    }
}

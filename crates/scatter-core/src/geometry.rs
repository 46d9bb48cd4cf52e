// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot regions, dot bounds).

/// Pixel rectangle; `right`/`bottom` are exclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Square of side `2 * radius` centred on `(cx, cy)`, the bounding box of a dot.
    pub const fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius)
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// True when the two rectangles share interior area (touching edges do not count).
    pub const fn overlaps(&self, other: &RectI32) -> bool {
        self.left < other.right && other.left < self.right && self.top < other.bottom && other.top < self.bottom
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl From<RectI32> for skia_safe::Rect {
    fn from(r: RectI32) -> Self {
        skia_safe::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
    }
}

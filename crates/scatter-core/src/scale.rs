// File: crates/scatter-core/src/scale.rs
// Summary: Linear value-to-pixel scales and data bounds for one 2-D plot.

/// Value coordinate (data space).
pub type Value = f64;

/// Pixels per data unit for a range drawn across `span_px` pixels.
/// A zero range has nothing to spread out, so the factor degenerates to 1.
#[inline]
pub fn scale_factor(min: Value, max: Value, span_px: i32) -> f64 {
    let range = (max - min).abs();
    if range != 0.0 { span_px as f64 / range } else { 1.0 }
}

/// Linear scale along one axis of a plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub min: Value,
    pub max: Value,
    pub span_px: i32,
    pub factor: f64,
}

impl AxisScale {
    pub fn new(min: Value, max: Value, span_px: i32) -> Self {
        Self { min, max, span_px, factor: scale_factor(min, max, span_px) }
    }

    /// Pixel distance of `v` from the axis origin (the `min` end).
    #[inline]
    pub fn offset(&self, v: Value) -> f64 {
        (v - self.min).abs() * self.factor
    }
}

/// Min/max of a 2-column projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: Value,
    pub min_y: Value,
    pub max_x: Value,
    pub max_y: Value,
}

impl Bounds {
    /// `None` for an empty slice.
    pub fn of(points: &[(Value, Value)]) -> Option<Self> {
        let (&(x0, y0), rest) = points.split_first()?;
        let mut b = Self { min_x: x0, min_y: y0, max_x: x0, max_y: y0 };
        for &(x, y) in rest {
            b.min_x = b.min_x.min(x);
            b.max_x = b.max_x.max(x);
            b.min_y = b.min_y.min(y);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

// File: crates/scatter-core/src/scatter.rs
// Summary: Single 2-D scatter plot: bounds, per-axis scales, pixel mapping and draw calls.

use log::trace;

use crate::canvas::{dot, rectangle, tag_dot, text};
use crate::format::{format_point, format_value};
use crate::geometry::RectI32;
use crate::scale::{AxisScale, Bounds};
use crate::surface::{Anchor, Rotation, Surface, TextSpec};
use crate::theme::Theme;
use crate::types::{FontSizes, AXIS_SPACE_PX, DOT_RADIUS_PX};

/// Drawing parameters shared by every plot of a matrix.
#[derive(Clone, Copy, Debug)]
pub struct PlotStyle {
    pub theme: Theme,
    pub fonts: FontSizes,
    /// Write each point's literal value next to its dot.
    pub annotated_dots: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self { theme: Theme::light(), fonts: FontSizes::default(), annotated_dots: false }
    }
}

/// One pairwise plot owning its region of the canvas.
///
/// The region is split into a label band of `AXIS_SPACE_PX` on the left and
/// at the bottom, and the plot area proper holding frame and dots.
pub struct ScatterPlot {
    data: Vec<(f64, f64)>,
    region: RectI32,
    area: RectI32,
    bounds: Bounds,
    x_scale: AxisScale,
    y_scale: AxisScale,
}

impl ScatterPlot {
    /// Returns `None` for empty `data`; a matrix never hands over an empty projection.
    pub fn new(data: Vec<(f64, f64)>, region: RectI32) -> Option<Self> {
        let bounds = Bounds::of(&data)?;
        Some(Self::with_bounds(data, bounds, region))
    }

    /// Build from precomputed `bounds`, which must cover `data`.
    pub fn with_bounds(data: Vec<(f64, f64)>, bounds: Bounds, region: RectI32) -> Self {
        let area = RectI32::from_ltwh(
            region.left + AXIS_SPACE_PX,
            region.top,
            region.width() - AXIS_SPACE_PX,
            region.height() - AXIS_SPACE_PX,
        );
        let x_scale = AxisScale::new(bounds.min_x, bounds.max_x, area.width());
        let y_scale = AxisScale::new(bounds.min_y, bounds.max_y, area.height());
        Self { data, region, area, bounds, x_scale, y_scale }
    }

    pub fn region(&self) -> RectI32 { self.region }
    /// Framed area the dots are mapped into.
    pub fn plot_area(&self) -> RectI32 { self.area }
    pub fn bounds(&self) -> Bounds { self.bounds }
    pub fn x_scale(&self) -> AxisScale { self.x_scale }
    pub fn y_scale(&self) -> AxisScale { self.y_scale }
    pub fn data(&self) -> &[(f64, f64)] { &self.data }

    /// Surface pixel for a data point. Y grows downward on the surface, so
    /// the offset is taken from the bottom edge of the plot area.
    pub fn to_px(&self, point: (f64, f64)) -> (i32, i32) {
        let x = self.area.left as f64 + self.x_scale.offset(point.0);
        let y = self.area.top as f64 + self.area.height() as f64 - self.y_scale.offset(point.1);
        (x.round() as i32, y.round() as i32)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &PlotStyle) {
        trace!(
            "plot region {:?}: x [{}, {}] factor {:.4}, y [{}, {}] factor {:.4}",
            self.region, self.bounds.min_x, self.bounds.max_x, self.x_scale.factor,
            self.bounds.min_y, self.bounds.max_y, self.y_scale.factor,
        );
        self.draw_frame(surface, style);
        self.draw_points(surface, style);
        self.draw_boundaries(surface, style);
    }

    fn draw_frame<S: Surface + ?Sized>(&self, surface: &mut S, style: &PlotStyle) {
        let a = self.area;
        rectangle(surface, a.left, a.top, a.width(), a.height(), style.theme.frame_fill, style.theme.frame_outline);
    }

    fn draw_points<S: Surface + ?Sized>(&self, surface: &mut S, style: &PlotStyle) {
        let theme = &style.theme;
        for &p in &self.data {
            let (x, y) = self.to_px(p);
            if style.annotated_dots {
                tag_dot(surface, x, y, &format_point(p), DOT_RADIUS_PX, theme.dot, style.fonts.small, theme.text);
            } else {
                dot(surface, x, y, DOT_RADIUS_PX, theme.dot);
            }
        }
    }

    /// Min/max labels: X along the bottom edge, Y rotated along the left edge.
    fn draw_boundaries<S: Surface + ?Sized>(&self, surface: &mut S, style: &PlotStyle) {
        let a = self.area;
        let b = self.bounds;
        let (size, color) = (style.fonts.paragraph, style.theme.text);

        text(surface, TextSpec::new(a.left, a.bottom, format_value(b.min_x), size, color));
        text(surface, TextSpec::new(a.right, a.bottom, format_value(b.max_x), size, color).anchored(Anchor::NorthEast));

        text(
            surface,
            TextSpec::new(a.left, a.bottom, format_value(b.min_y), size, color)
                .anchored(Anchor::SouthWest)
                .rotated(Rotation::Deg90),
        );
        text(
            surface,
            TextSpec::new(a.left, a.top, format_value(b.max_y), size, color)
                .anchored(Anchor::SouthEast)
                .rotated(Rotation::Deg90),
        );
    }
}

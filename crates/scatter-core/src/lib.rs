// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports public API for scatterplot matrix layout and rendering.

pub mod canvas;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geometry;
pub mod loader;
pub mod matrix;
pub mod render;
pub mod scale;
pub mod scatter;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use geometry::RectI32;
pub use matrix::{plot, variable_tags, MatrixOptions, ScatterMatrix};
pub use render::SkiaSurface;
pub use scale::{scale_factor, AxisScale, Bounds};
pub use scatter::{PlotStyle, ScatterPlot};
pub use surface::{Anchor, DrawOp, RecordingSurface, Rotation, Surface, TextSpec};
pub use theme::Theme;
pub use text::TextShaper;

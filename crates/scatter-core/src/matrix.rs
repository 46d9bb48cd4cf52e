// File: crates/scatter-core/src/matrix.rs
// Summary: Scatterplot matrix: grid layout of D x D pairwise plots, header texts and variable tags.

use anyhow::Result;
use log::{debug, warn};
use skia_safe as skia;

use crate::canvas::text;
use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::geometry::RectI32;
use crate::render::SkiaSurface;
use crate::scatter::{PlotStyle, ScatterPlot};
use crate::surface::{Rotation, Surface, TextSpec};
use crate::theme::Theme;
use crate::types::{FontSizes, Spacing, HEIGHT, WIDTH};

pub const DEFAULT_TITLE: &str = "my n-dimension correlated plot";
pub const DEFAULT_DESCRIPTION: &str =
    "this plot can have n > 1 variables; it uses a correlated plot system to visualize the multiple dimensions";

pub struct MatrixOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Overrides the theme background when set.
    pub background: Option<skia::Color>,
    pub title: String,
    pub description: String,
    pub annotated_dots: bool,
    pub spacing: Spacing,
    pub fonts: FontSizes,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::light(),
            background: None,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            annotated_dots: false,
            spacing: Spacing::default(),
            fonts: FontSizes::default(),
        }
    }
}

impl MatrixOptions {
    pub fn background(&self) -> skia::Color {
        self.background.unwrap_or(self.theme.background)
    }

    fn plot_style(&self) -> PlotStyle {
        PlotStyle { theme: self.theme, fonts: self.fonts, annotated_dots: self.annotated_dots }
    }
}

/// Axis tag names: `x, y, z, t` up to four variables, `dim0..` beyond.
pub fn variable_tags(variable_count: usize) -> Vec<String> {
    if variable_count <= 4 {
        ["x", "y", "z", "t"][..variable_count].iter().map(|s| s.to_string()).collect()
    } else {
        (0..variable_count).map(|d| format!("dim{d}")).collect()
    }
}

/// Grid of pairwise scatter plots.
///
/// Cell `(i, j)` plots variable `i` on X against variable `j` on Y. Column
/// `i` grows rightward from the left edge, row `j` grows upward from the
/// bottom edge, so `(0, 0)` is the bottom-left cell:
///
/// ```text
/// (0,1) (1,1) ...
/// (0,0) (1,0) ...
/// ```
pub struct ScatterMatrix {
    dataset: Dataset,
    options: MatrixOptions,
    cell_width: i32,
    cell_height: i32,
}

impl ScatterMatrix {
    /// Validate `points` and compute the cell size.
    pub fn new(points: Vec<Vec<f64>>, options: MatrixOptions) -> Result<Self, DatasetError> {
        Ok(Self::from_dataset(Dataset::try_new(points)?, options))
    }

    pub fn from_dataset(dataset: Dataset, options: MatrixOptions) -> Self {
        let (cell_width, cell_height) = cell_size(&options, dataset.dimension());
        debug!(
            "matrix {}x{} canvas, {} variables, {} points, cell {}x{}",
            options.width, options.height, dataset.dimension(), dataset.len(), cell_width, cell_height,
        );
        if cell_width <= 0 || cell_height <= 0 {
            warn!("canvas {}x{} too small for {} variables", options.width, options.height, dataset.dimension());
        }
        Self { dataset, options, cell_width, cell_height }
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn options(&self) -> &MatrixOptions { &self.options }
    pub fn variable_count(&self) -> usize { self.dataset.dimension() }
    pub fn cell_size(&self) -> (i32, i32) { (self.cell_width, self.cell_height) }

    /// Top-left pixel of cell `(variable_x, variable_y)`.
    pub fn cell_origin(&self, variable_x: usize, variable_y: usize) -> (i32, i32) {
        let s = &self.options.spacing;
        let x0 = s.exterior + s.tag + (self.cell_width + s.interior) * variable_x as i32;
        let y0 = self.options.height - s.tag - s.exterior - self.cell_height
            - (self.cell_height + s.interior) * variable_y as i32;
        (x0, y0)
    }

    pub fn cell_region(&self, variable_x: usize, variable_y: usize) -> RectI32 {
        let (x0, y0) = self.cell_origin(variable_x, variable_y);
        RectI32::from_ltwh(x0, y0, self.cell_width, self.cell_height)
    }

    /// All `(variable_x, variable_y, region)` cells, column by column.
    pub fn regions(&self) -> Vec<(usize, usize, RectI32)> {
        let n = self.variable_count();
        (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).map(|(i, j)| (i, j, self.cell_region(i, j))).collect()
    }

    /// The 2-D plot for cell `(variable_x, variable_y)`.
    pub fn plot(&self, variable_x: usize, variable_y: usize) -> ScatterPlot {
        let data = self.dataset.project(variable_x, variable_y);
        let bounds = self.dataset.bounds(variable_x, variable_y);
        ScatterPlot::with_bounds(data, bounds, self.cell_region(variable_x, variable_y))
    }

    pub fn title_origin(&self) -> (i32, i32) {
        let s = &self.options.spacing;
        (s.exterior, s.exterior)
    }

    pub fn description_origin(&self) -> (i32, i32) {
        let s = &self.options.spacing;
        (s.exterior, s.exterior + s.title)
    }

    /// Origin of the tag under column `variable`.
    pub fn x_tag_origin(&self, variable: usize) -> (i32, i32) {
        let s = &self.options.spacing;
        (
            s.exterior + s.tag + (self.cell_width + s.interior) * variable as i32,
            self.options.height - s.exterior - s.tag,
        )
    }

    /// Origin of the rotated tag left of row `variable`.
    pub fn y_tag_origin(&self, variable: usize) -> (i32, i32) {
        let s = &self.options.spacing;
        (
            s.exterior,
            self.options.height - (s.exterior + s.tag + (self.cell_height + s.interior) * variable as i32),
        )
    }

    /// Clear to the background, then draw header, tags and every cell onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.options.background());
        self.draw_header(surface);
        self.draw_variable_tags(surface);

        let style = self.options.plot_style();
        let n = self.variable_count();
        for variable_x in 0..n {
            for variable_y in 0..n {
                self.plot(variable_x, variable_y).draw(surface, &style);
            }
        }
    }

    /// Render onto a fresh Skia raster surface sized from the options.
    pub fn render(&self) -> Result<SkiaSurface> {
        let mut surface = SkiaSurface::new(self.options.width, self.options.height, self.options.background())?;
        self.draw(&mut surface);
        Ok(surface)
    }

    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        self.render()?.write_png(output_png_path)
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        self.render()?.png_bytes()
    }

    /// `(pixels, width, height, stride)` in unpremultiplied RGBA8.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.render()?.rgba8()
    }

    fn draw_header<S: Surface + ?Sized>(&self, surface: &mut S) {
        let o = &self.options;
        let (x, y) = self.title_origin();
        text(surface, TextSpec::new(x, y, o.title.as_str(), o.fonts.heading, o.theme.text).bold());
        let (x, y) = self.description_origin();
        text(surface, TextSpec::new(x, y, o.description.as_str(), o.fonts.paragraph, o.theme.text));
    }

    fn draw_variable_tags<S: Surface + ?Sized>(&self, surface: &mut S) {
        let o = &self.options;
        for (variable, tag) in variable_tags(self.variable_count()).into_iter().enumerate() {
            let (x, y) = self.x_tag_origin(variable);
            text(surface, TextSpec::new(x, y, tag.as_str(), o.fonts.paragraph, o.theme.text));
            let (x, y) = self.y_tag_origin(variable);
            text(surface, TextSpec::new(x, y, tag, o.fonts.paragraph, o.theme.text).rotated(Rotation::Deg90));
        }
    }
}

/// Build the matrix for `points` and draw it onto `surface` in one step.
pub fn plot<S: Surface + ?Sized>(
    points: Vec<Vec<f64>>,
    surface: &mut S,
    options: MatrixOptions,
) -> Result<ScatterMatrix, DatasetError> {
    let matrix = ScatterMatrix::new(points, options)?;
    matrix.draw(surface);
    Ok(matrix)
}

// ---- helpers ----------------------------------------------------------------

/// Per-cell `(width, height)`: what is left after margins, split evenly and floored.
fn cell_size(options: &MatrixOptions, variable_count: usize) -> (i32, i32) {
    let n = variable_count as i32;
    let usable_width = options.width - options.spacing.horizontal_margins(n);
    let usable_height = options.height - options.spacing.vertical_margins(n);
    (usable_width.div_euclid(n), usable_height.div_euclid(n))
}

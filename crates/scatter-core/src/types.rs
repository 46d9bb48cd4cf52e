// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (surface size, spacing bands, font sizes).

/// Default surface width in pixels (1000 px window minus a 20 px frame).
pub const WIDTH: i32 = 980;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 980;

pub const MED_SPACE_PX: i32 = 25;
pub const MIN_SPACE_PX: i32 = 15;

/// Band reserved left of and below each plot area for boundary labels.
pub const AXIS_SPACE_PX: i32 = MED_SPACE_PX;
pub const DOT_RADIUS_PX: i32 = 3;

/// Fixed bands the grid layout reserves around and between cells, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spacing {
    /// Padding on every side of the canvas.
    pub exterior: i32,
    /// Band holding the variable tags (left and bottom edges).
    pub tag: i32,
    /// Gap between two neighbouring cells.
    pub interior: i32,
    pub title: i32,
    pub description: i32,
    /// Gap between the description and the top row of cells.
    pub description_lower: i32,
}

impl Spacing {
    /// Horizontal space not available to cells for `variable_count` columns.
    pub const fn horizontal_margins(&self, variable_count: i32) -> i32 {
        2 * self.exterior + self.tag + (variable_count - 1) * self.interior
    }

    /// Vertical space not available to cells; adds the header bands.
    pub const fn vertical_margins(&self, variable_count: i32) -> i32 {
        self.horizontal_margins(variable_count) + self.header()
    }

    /// Title + description + the gap under the description.
    pub const fn header(&self) -> i32 {
        self.title + self.description + self.description_lower
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            exterior: MED_SPACE_PX,
            tag: MED_SPACE_PX,
            interior: MIN_SPACE_PX,
            title: MED_SPACE_PX + 5,
            description: MED_SPACE_PX,
            description_lower: MIN_SPACE_PX,
        }
    }
}

/// Font sizes in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub heading: f32,
    pub paragraph: f32,
    /// Used for per-dot annotations.
    pub small: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { heading: 20.0, paragraph: 12.0, small: 6.0 }
    }
}

// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for matrix rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Fill of each plot area inside its frame.
    pub frame_fill: skia::Color,
    pub frame_outline: skia::Color,
    pub dot: skia::Color,
    pub text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            frame_fill: skia::Color::WHITE,
            frame_outline: skia::Color::BLACK,
            dot: skia::Color::BLACK,
            text: skia::Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame_fill: skia::Color::from_argb(255, 28, 28, 32),
            frame_outline: skia::Color::from_argb(255, 180, 180, 190),
            dot: skia::Color::from_argb(255, 64, 160, 255),
            text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            frame_fill: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            frame_outline: skia::Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            dot: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),        // blue
            text: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),       // base03
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

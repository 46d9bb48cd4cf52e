// File: crates/scatter-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; places anchored and rotated labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::surface::{anchor_origin, Rotation, TextSpec};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, bold: bool, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_color(color);
        ts.set_font_families(&["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif", "serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, bold: bool, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, bold, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `spec` with its anchor corner on `(x, y)`. Rotated text turns
    /// about that point, so the anchor refers to the unrotated box.
    pub fn draw(&self, canvas: &skia::Canvas, spec: &TextSpec) {
        let mut paragraph = self.layout(&spec.text, spec.size, spec.bold, spec.color);
        let (w, h) = (paragraph.longest_line(), paragraph.height());
        let (x, y) = (spec.x as f32, spec.y as f32);
        match spec.rotation {
            Rotation::None => {
                let (left, top) = anchor_origin(spec.anchor, x, y, w, h);
                paragraph.paint(canvas, (left, top));
            }
            Rotation::Deg90 => {
                let (dx, dy) = anchor_origin(spec.anchor, 0.0, 0.0, w, h);
                canvas.save();
                canvas.translate((x, y));
                canvas.rotate(-90.0, None);
                paragraph.paint(canvas, (dx, dy));
                canvas.restore();
            }
        }
    }
}

// File: crates/scatter-core/src/render.rs
// Summary: Skia CPU raster Surface with PNG and RGBA8 export.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::surface::{Surface, TextSpec};
use crate::text::TextShaper;

pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl SkiaSurface {
    /// Create a `width` x `height` raster surface cleared to `background`.
    pub fn new(width: i32, height: i32, background: skia::Color) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        surface.canvas().clear(background);
        Ok(Self { surface, shaper: TextShaper::new(), width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode to PNG at `path`, creating parent directories as needed.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA pixels as `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels from raster surface failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    fn fill_oval(&mut self, bounds: RectI32, fill: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(fill);
        self.surface.canvas().draw_oval(skia::Rect::from(bounds), &paint);
    }

    fn rectangle(&mut self, rect: RectI32, fill: skia::Color, outline: skia::Color) {
        let r = skia::Rect::from(rect);
        let canvas = self.surface.canvas();

        let mut body = skia::Paint::default();
        body.set_style(skia::paint::Style::Fill);
        body.set_color(fill);
        canvas.draw_rect(r, &body);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(outline);
        canvas.draw_rect(r, &stroke);
    }

    fn text(&mut self, spec: &TextSpec) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, spec);
    }
}

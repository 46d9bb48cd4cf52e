// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that renders the scatterplot matrix once and blits it via winit + softbuffer.

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info};
use scatter_core::loader::{load_points_csv, sample_points};
use scatter_core::{MatrixOptions, ScatterMatrix};
use std::num::NonZeroU32;
use std::path::PathBuf;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const WINDOW_WIDTH: u32 = 1000;
const WINDOW_HEIGHT: u32 = 1000;
/// Gap kept between the matrix canvas and the window edges.
const FRAME_SIZE_PX: u32 = 20;
/// Window area not covered by the canvas (0RGB).
const WINDOW_FILL: u32 = 0x00d9_d9d9;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Arg: optional CSV path with a header row
    let points = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_points_csv(&path, true)?,
        None => sample_points(),
    };

    let opts = MatrixOptions {
        width: (WINDOW_WIDTH - FRAME_SIZE_PX) as i32,
        height: (WINDOW_HEIGHT - FRAME_SIZE_PX) as i32,
        annotated_dots: false, // set to true to display exact dot value
        ..Default::default()
    };
    let matrix = ScatterMatrix::new(points, opts).context("cannot plot dataset")?;
    let (rgba, canvas_w, canvas_h, _) = matrix.render_to_rgba8()?;
    info!("Rendered {}x{} canvas for {} variables", canvas_w, canvas_h, matrix.variable_count());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(matrix.options().title.as_str())
        .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let canvas = Canvas { rgba, width: canvas_w, height: canvas_h };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                *cf = ControlFlow::Exit;
            }
            Event::WindowEvent { event: WindowEvent::Resized(_), .. } => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!("resize error: {e:?}");
                    return;
                }
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("frame error: {e:?}");
                        return;
                    }
                };
                canvas.blit(&mut frame, size.width, size.height);
                if let Err(e) = frame.present() {
                    error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

/// Rendered matrix pixels, unpremultiplied RGBA8.
struct Canvas {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Copy into a `frame_w` x `frame_h` 0RGB frame, centred horizontally at the top,
    /// clipping whatever does not fit and filling the rest with `WINDOW_FILL`.
    fn blit(&self, frame: &mut [u32], frame_w: u32, frame_h: u32) {
        frame.fill(WINDOW_FILL);
        let x_off = frame_w.saturating_sub(self.width) / 2;
        let cols = self.width.min(frame_w - x_off) as usize;
        let rows = self.height.min(frame_h) as usize;
        for y in 0..rows {
            let src = &self.rgba[y * self.width as usize * 4..][..cols * 4];
            let dst = &mut frame[y * frame_w as usize + x_off as usize..][..cols];
            for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
                let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
                *d = (r << 16) | (g << 8) | b;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32, rgb: [u8; 3]) -> Canvas {
        let rgba = (0..width * height).flat_map(|_| [rgb[0], rgb[1], rgb[2], 255]).collect();
        Canvas { rgba, width, height }
    }

    #[test]
    fn centres_canvas_horizontally_at_top() {
        let c = canvas(2, 1, [0x12, 0x34, 0x56]);
        let mut frame = vec![0u32; 6 * 2];
        c.blit(&mut frame, 6, 2);
        assert_eq!(&frame[..6], &[WINDOW_FILL, WINDOW_FILL, 0x123456, 0x123456, WINDOW_FILL, WINDOW_FILL]);
        assert!(frame[6..].iter().all(|&p| p == WINDOW_FILL));
    }

    #[test]
    fn clips_to_smaller_frame() {
        let c = canvas(4, 4, [255, 0, 0]);
        let mut frame = vec![0u32; 2 * 3];
        c.blit(&mut frame, 2, 3);
        assert!(frame.iter().all(|&p| p == 0xff0000));
    }
}

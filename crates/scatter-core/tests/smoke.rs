// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use scatter_core::{MatrixOptions, ScatterMatrix, SkiaSurface, Theme};

fn sample() -> Vec<Vec<f64>> {
    vec![
        vec![6.08804, 3.457729, 1.0],
        vec![5.275341, 6.538759, 2.0],
        vec![4.184762, 5.221742, 3.0],
        vec![0.678713, 0.951598, 2.5],
        vec![-0.957855, 0.631947, 1.5],
    ]
}

#[test]
fn render_smoke_png() {
    let opts = MatrixOptions { width: 480, height: 480, annotated_dots: true, ..Default::default() };
    let matrix = ScatterMatrix::new(sample(), opts).expect("valid dataset");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    matrix.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = matrix.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let opts = MatrixOptions { width: 320, height: 240, theme: Theme::dark(), ..Default::default() };
    let matrix = ScatterMatrix::new(sample(), opts).expect("valid dataset");
    let (px, w, h, stride) = matrix.render_to_rgba8().expect("rgba render");
    assert_eq!((w, h), (320, 240));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is untouched background (RGBA).
    let bg = Theme::dark().background;
    assert_eq!(&px[..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn background_override_wins_over_theme() {
    let opts = MatrixOptions { width: 200, height: 200, background: Some(skia_safe::Color::from_rgb(10, 200, 30)), ..Default::default() };
    let matrix = ScatterMatrix::new(sample(), opts).unwrap();
    let (px, ..) = matrix.render_to_rgba8().unwrap();
    assert_eq!(&px[..4], &[10, 200, 30, 255]);
}

#[test]
fn blank_surface_is_cleared() {
    let mut s = SkiaSurface::new(8, 4, skia_safe::Color::WHITE).unwrap();
    let (px, w, h, _) = s.rgba8().unwrap();
    assert_eq!((w, h), (8, 4));
    assert!(px.iter().all(|&b| b == 255));
}

// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small matrix to PNG bytes with empty title/description
//   (boundary numbers still depend on installed fonts).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use scatter_core::{MatrixOptions, ScatterMatrix};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "Size differs: {}", path.display());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(points: Vec<Vec<f64>>, annotated_dots: bool) -> Vec<u8> {
    let opts = MatrixOptions {
        width: 360,
        height: 360,
        title: String::new(),
        description: String::new(),
        annotated_dots,
        ..Default::default()
    };
    ScatterMatrix::new(points, opts).expect("valid dataset").render_to_png_bytes().expect("render bytes")
}

#[test]
fn golden_two_variables() {
    let bytes = render_bytes(vec![vec![0.0, 0.0], vec![1.0, 2.0], vec![2.0, 1.0], vec![3.0, 3.5]], false);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/two_variables.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_three_variables_annotated() {
    let points = (0..5).map(|i| vec![i as f64, (i * i) as f64 * 0.5, 4.0 - i as f64]).collect();
    let bytes = render_bytes(points, true);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/three_variables_annotated.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn render_is_deterministic() {
    let points = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
    assert_eq!(render_bytes(points.clone(), false), render_bytes(points, false));
}

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{MatrixOptions, RecordingSurface, ScatterMatrix};

fn build_points(n: usize, dimension: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.01;
            (0..dimension).map(|d| (t * (d + 1) as f64).sin() * 10.0 + d as f64).collect()
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_recording");
    for &d in &[2usize, 5] {
        let m = ScatterMatrix::new(build_points(5_000, d), MatrixOptions::default()).expect("valid dataset");
        group.bench_function(format!("d{d}_5000"), |b| {
            b.iter(|| {
                let mut s = RecordingSurface::new();
                m.draw(&mut s);
                black_box(s.ops.len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("d4_{n}"), |b| {
            let opts = MatrixOptions { width: 800, height: 800, ..Default::default() };
            let m = ScatterMatrix::new(build_points(n, 4), opts).expect("valid dataset");
            b.iter(|| -> Result<()> {
                let bytes = m.render_to_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);

// File: crates/demo/src/main.rs
// Summary: Demo loads a numeric CSV (or the built-in sample) and renders its scatterplot matrix to PNG.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use scatter_core::loader::{load_points_csv, sample_points};
use scatter_core::matrix::{DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use scatter_core::{theme, MatrixOptions, ScatterMatrix};
use skia_safe as skia;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scatter-demo", about = "Render a scatterplot matrix of a numeric CSV to PNG")]
struct Cli {
    /// CSV file, one point per row; omit to plot the built-in 2-D sample
    input: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "target/out/scatter_matrix.png")]
    out: PathBuf,

    #[arg(long, default_value_t = scatter_core::types::WIDTH)]
    width: i32,

    #[arg(long, default_value_t = scatter_core::types::HEIGHT)]
    height: i32,

    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    description: String,

    /// Write each point's value next to its dot
    #[arg(long)]
    annotate: bool,

    /// light, dark or solarized-light
    #[arg(long, default_value = "light")]
    theme: String,

    /// Background override as RRGGBB hex
    #[arg(long, value_parser = parse_hex_color)]
    background: Option<skia::Color>,

    /// Treat the first CSV row as data instead of a header
    #[arg(long)]
    no_header: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let points = match &cli.input {
        Some(path) => load_points_csv(path, !cli.no_header)?,
        None => {
            info!("No input file; using the built-in sample");
            sample_points()
        }
    };

    let opts = MatrixOptions {
        width: cli.width,
        height: cli.height,
        theme: theme::find(&cli.theme),
        background: cli.background,
        title: cli.title,
        description: cli.description,
        annotated_dots: cli.annotate,
        ..Default::default()
    };

    let matrix = ScatterMatrix::new(points, opts).context("cannot plot dataset")?;
    info!(
        "{} points x {} variables, cell {:?}",
        matrix.dataset().len(),
        matrix.variable_count(),
        matrix.cell_size()
    );

    matrix.render_to_png(&cli.out)?;
    println!("Wrote {}", cli.out.display());
    Ok(())
}

fn parse_hex_color(s: &str) -> Result<skia::Color, String> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format!("expected RRGGBB, got '{s}'"));
    }
    let v = u32::from_str_radix(hex, 16).map_err(|e| format!("'{s}': {e}"))?;
    Ok(skia::Color::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
}

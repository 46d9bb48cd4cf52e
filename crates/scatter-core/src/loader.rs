// File: crates/scatter-core/src/loader.rs
// Summary: CSV point loading and the built-in sample dataset used by the demos.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

/// Seven 2-D points shown when no input file is given.
pub const SAMPLE: [(f64, f64); 7] = [
    (6.08804, 3.457729),
    (5.275341, 6.538759),
    (4.184762, 5.221742),
    (0.678713, 0.951598),
    (-0.957855, 0.631947),
    (-0.131799, -0.324218),
    (-0.229171, 0.900907),
];

pub fn sample_points() -> Vec<Vec<f64>> {
    SAMPLE.iter().map(|&(x, y)| vec![x, y]).collect()
}

/// One point per record; every field must parse as `f64`.
pub fn read_points<R: std::io::Read>(reader: R, has_headers: bool) -> Result<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    if has_headers {
        let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        debug!("Headers: {:?}", headers);
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading record {row}"))?;
        let point = rec
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field.parse::<f64>().with_context(|| format!("record {row}, column {col}: '{field}' is not a number"))
            })
            .collect::<Result<Vec<_>>>()?;
        out.push(point);
    }
    Ok(out)
}

pub fn load_points_csv(path: &Path, has_headers: bool) -> Result<Vec<Vec<f64>>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let points = read_points(file, has_headers).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

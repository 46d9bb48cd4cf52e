// File: crates/scatter-core/src/format.rs
// Summary: Number and point formatting for boundary labels and dot annotations.

/// Integral values keep one decimal (`10.0`); everything else uses the
/// shortest representation that round-trips (`-0.957855`).
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// `(x, y)` tuple literal used to annotate a dot.
pub fn format_point(p: (f64, f64)) -> String {
    format!("({}, {})", format_value(p.0), format_value(p.1))
}

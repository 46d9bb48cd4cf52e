// File: crates/scatter-core/src/error.rs
// Summary: Dataset validation errors.

use thiserror::Error;

/// The dataset cannot be laid out as a scatterplot matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("invalid dataset: no points")]
    Empty,
    #[error("invalid dataset: points need at least 2 variables, found {found}")]
    TooFewVariables { found: usize },
    #[error("invalid dataset: point {index} has {found} variables, expected {expected}")]
    Ragged { index: usize, expected: usize, found: usize },
    #[error("invalid dataset: point {index} variable {variable} is not a finite number")]
    NonFinite { index: usize, variable: usize },
}

// File: crates/scatter-core/src/dataset.rs
// Summary: Validated multidimensional dataset and its 2-column projections.

use crate::error::DatasetError;
use crate::scale::Bounds;

/// Non-empty set of finite points sharing one dimension D >= 2.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    points: Vec<Vec<f64>>,
    dimension: usize,
}

impl Dataset {
    /// Validate `points`; the first point fixes the dimension.
    pub fn try_new(points: Vec<Vec<f64>>) -> Result<Self, DatasetError> {
        let first = points.first().ok_or(DatasetError::Empty)?;
        let dimension = first.len();
        if dimension < 2 {
            return Err(DatasetError::TooFewVariables { found: dimension });
        }
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| p.len() != dimension) {
            return Err(DatasetError::Ragged { index, expected: dimension, found: p.len() });
        }
        for (index, p) in points.iter().enumerate() {
            if let Some(variable) = p.iter().position(|v| !v.is_finite()) {
                return Err(DatasetError::NonFinite { index, variable });
            }
        }
        Ok(Self { points, dimension })
    }

    /// Convenience for the common 2-D case.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, DatasetError> {
        Self::try_new(pairs.iter().map(|&(x, y)| vec![x, y]).collect())
    }

    pub fn dimension(&self) -> usize { self.dimension }
    pub fn len(&self) -> usize { self.points.len() }
    /// Always false: validation rejects empty datasets.
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[Vec<f64>] { &self.points }

    /// Every point reduced to `(point[x], point[y])`, in dataset order.
    /// Panics if either index is not below `dimension()`.
    pub fn project(&self, x: usize, y: usize) -> Vec<(f64, f64)> {
        assert!(x < self.dimension && y < self.dimension, "projection ({x}, {y}) out of range");
        self.points.iter().map(|p| (p[x], p[y])).collect()
    }

    /// Bounds of the `(x, y)` projection; never empty for a validated dataset.
    pub fn bounds(&self, x: usize, y: usize) -> Bounds {
        let first = &self.points[0];
        let init = Bounds { min_x: first[x], min_y: first[y], max_x: first[x], max_y: first[y] };
        self.points.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p[x]),
            min_y: b.min_y.min(p[y]),
            max_x: b.max_x.max(p[x]),
            max_y: b.max_y.max(p[y]),
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for Dataset {
    type Error = DatasetError;

    fn try_from(points: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::try_new(points)
    }
}

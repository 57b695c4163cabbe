//! Row-major scalar field with global [0, 1] normalization.

use rayon::prelude::*;

/// A row-major grid of per-cell values. After `build_normalized` every
/// value lies in [0, 1].
#[derive(Clone)]
pub struct Field {
    pub cols: usize,
    pub rows: usize,
    values: Vec<f64>,
}

impl Field {
    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Evaluate `sample_fn(col, row)` for every cell and linearly rescale the
/// results into [0, 1] against the global min/max.
///
/// Cells are independent, so sampling runs row-parallel; the min/max scan
/// is the single synchronization point of the whole generation pipeline.
///
/// Boundary condition: a perfectly flat input (max == min) falls back to a
/// divisor of 1 and collapses to an all-zero field instead of dividing by
/// zero. That is documented behavior, not an error.
pub fn build_normalized<F>(cols: usize, rows: usize, sample_fn: F) -> Field
where
    F: Fn(usize, usize) -> f64 + Sync,
{
    let mut values: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|row| {
            let f = &sample_fn;
            (0..cols).map(move |col| f(col, row))
        })
        .collect();

    let (min, max) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });

    let span = if max > min { max - min } else { 1.0 };
    for v in &mut values {
        *v = (*v - min) / span;
    }

    Field { cols, rows, values }
}

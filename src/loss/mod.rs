use anyhow::bail;
use ndarray::{Array2, ArrayView1};

use crate::utils::FloatOps;

/// Total L1 (sum of absolute differences) and L2 (sum of squared
/// differences) loss between two vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossSummary {
    pub l1: f64,
    pub l2: f64,
}

/// Compares `v` and `u` element by element.
///
/// Returns the summed losses plus an n×2 table with one row per element:
/// column 0 holds |vᵢ − uᵢ| and column 1 holds (vᵢ − uᵢ)².
pub fn elementwise_loss<T: FloatOps>(
    v: ArrayView1<T>,
    u: ArrayView1<T>,
) -> anyhow::Result<(LossSummary, Array2<f64>)> {
    if v.len() != u.len() {
        bail!(
            "vectors must have equal length (got {} and {})",
            v.len(),
            u.len()
        );
    }

    let mut table = Array2::zeros((v.len(), 2));
    let mut summary = LossSummary { l1: 0.0, l2: 0.0 };
    for (i, (&x, &y)) in v.iter().zip(u.iter()).enumerate() {
        let diff = (x - y).to_f64().unwrap();
        table[[i, 0]] = diff.abs();
        table[[i, 1]] = diff * diff;
        summary.l1 += diff.abs();
        summary.l2 += diff * diff;
    }

    Ok((summary, table))
}

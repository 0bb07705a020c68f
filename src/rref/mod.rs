//! Reduced row-echelon form via Gauss–Jordan elimination with partial
//! pivoting. The pivot column indices this produces feed directly into
//! [`crate::basis::extract_basis`].

use log::{debug, trace};
use ndarray::{Array2, ArrayView2};

use crate::utils::FloatOps;

/// Result of row-reducing a matrix.
///
/// `pivots` holds the 0-based pivot column indices, sorted ascending with one
/// entry per independent column. Its length is the rank of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEchelon<T> {
    reduced: Array2<T>,
    pivots: Vec<usize>,
}

impl<T> RowEchelon<T> {
    /// The matrix in reduced row-echelon form.
    pub fn reduced(&self) -> &Array2<T> {
        &self.reduced
    }

    /// Pivot column indices, ascending.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn into_parts(self) -> (Array2<T>, Vec<usize>) {
        (self.reduced, self.pivots)
    }
}

/// Row-reduces `matrix` to reduced row-echelon form.
///
/// Uses partial pivoting and a scale-relative zero tolerance, so entries that
/// only differ from zero by accumulated rounding noise do not produce
/// spurious pivots.
pub fn row_reduce<T: FloatOps>(matrix: ArrayView2<T>) -> RowEchelon<T> {
    let (nrows, ncols) = matrix.dim();
    let mut reduced = matrix.to_owned();
    let mut pivots = Vec::new();

    let max_abs = reduced.iter().fold(T::zero(), |m, &v| m.max(v.abs()));
    let tolerance = max_abs * T::epsilon() * T::from(nrows.max(ncols)).unwrap();

    let mut pivot_row = 0;
    for col in 0..ncols {
        if pivot_row >= nrows {
            break;
        }

        let mut best_row = pivot_row;
        let mut best_val = reduced[[pivot_row, col]].abs();
        for row in (pivot_row + 1)..nrows {
            let val = reduced[[row, col]].abs();
            if val > best_val {
                best_val = val;
                best_row = row;
            }
        }

        if best_val <= tolerance {
            trace!("column {} has no usable pivot", col);
            continue;
        }

        if best_row != pivot_row {
            for j in 0..ncols {
                reduced.swap([best_row, j], [pivot_row, j]);
            }
        }

        let pivot = reduced[[pivot_row, col]];
        for j in col..ncols {
            reduced[[pivot_row, j]] = reduced[[pivot_row, j]] / pivot;
        }

        for row in 0..nrows {
            if row == pivot_row {
                continue;
            }
            let factor = reduced[[row, col]];
            if factor == T::zero() {
                continue;
            }
            for j in col..ncols {
                let update = reduced[[row, j]] - factor * reduced[[pivot_row, j]];
                reduced[[row, j]] = update;
            }
        }

        debug!("pivot at column {} (row {})", col, pivot_row);
        pivots.push(col);
        pivot_row += 1;
    }

    RowEchelon { reduced, pivots }
}

/// Computes a basis for the null space of `matrix`.
///
/// Returns a C×f matrix whose columns span the kernel, one column per free
/// column of the reduced form. A full-rank matrix yields a C×0 result.
pub fn null_space<T: FloatOps>(matrix: ArrayView2<T>) -> Array2<T> {
    let ncols = matrix.ncols();
    let echelon = row_reduce(matrix);
    let free: Vec<usize> = (0..ncols)
        .filter(|c| !echelon.pivots.contains(c))
        .collect();

    let mut kernel = Array2::zeros((ncols, free.len()));
    for (j, &free_col) in free.iter().enumerate() {
        kernel[[free_col, j]] = T::one();
        for (row, &pivot_col) in echelon.pivots.iter().enumerate() {
            kernel[[pivot_col, j]] = -echelon.reduced[[row, free_col]];
        }
    }
    kernel
}

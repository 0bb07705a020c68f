use std::cmp::Ordering;

use anyhow::{anyhow, bail};
use ndarray::{Array1, Array2, ArrayView2};
use nshare::IntoNalgebra;

use super::Svd;

/// Eigen-decomposition of a general square matrix with real eigenvalues,
/// sorted descending. Matrices with complex eigenvalues are rejected.
pub struct Eig {
    values: Array1<f64>,
    vectors: Array2<f64>,
}

impl Eig {
    pub fn new(matrix: ArrayView2<f64>) -> anyhow::Result<Self> {
        let (nrows, ncols) = matrix.dim();
        if nrows != ncols {
            bail!("matrix must be square (got {}x{})", nrows, ncols);
        }

        let m = matrix.into_nalgebra().clone_owned();
        let eigenvalues = m
            .eigenvalues()
            .ok_or_else(|| anyhow!("matrix has complex eigenvalues"))?;

        let mut values: Vec<f64> = eigenvalues.iter().cloned().collect();
        values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        // Each eigenvector spans the kernel of A - λI; the right singular
        // vector for the smallest singular value recovers it stably even
        // though the shifted matrix is only singular up to rounding.
        let mut vectors = Array2::zeros((nrows, nrows));
        for (j, &lambda) in values.iter().enumerate() {
            let mut shifted = matrix.to_owned();
            for i in 0..nrows {
                shifted[[i, i]] -= lambda;
            }
            let svd = Svd::new(shifted.view())?;
            for i in 0..nrows {
                vectors[[i, j]] = svd.vt()[[nrows - 1, i]];
            }
        }

        Ok(Eig {
            values: Array1::from(values),
            vectors,
        })
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Unit eigenvectors as columns, in the same order as the eigenvalues.
    pub fn vectors(&self) -> &Array2<f64> {
        &self.vectors
    }
}

/// Eigen-decomposition of a symmetric matrix, sorted by descending
/// eigenvalue. Eigenvectors are the columns of [`SymmetricEig::vectors`],
/// in the same order as the eigenvalues.
pub struct SymmetricEig {
    values: Array1<f64>,
    vectors: Array2<f64>,
}

impl SymmetricEig {
    pub fn new(matrix: ArrayView2<f64>) -> anyhow::Result<Self> {
        let (nrows, ncols) = matrix.dim();
        if nrows != ncols {
            bail!("matrix must be square (got {}x{})", nrows, ncols);
        }

        let scale = matrix.iter().fold(0.0f64, |m, &v| m.max(v.abs()));
        for i in 0..nrows {
            for j in 0..i {
                if (matrix[[i, j]] - matrix[[j, i]]).abs() > scale * 1e-10 {
                    bail!(
                        "matrix is not symmetric at ({}, {}) / ({}, {})",
                        i,
                        j,
                        j,
                        i
                    );
                }
            }
        }

        let m = matrix.into_nalgebra().clone_owned();
        let eig = nalgebra::SymmetricEigen::new(m);

        let mut order: Vec<usize> = (0..nrows).collect();
        order.sort_by(|&a, &b| {
            eig.eigenvalues[b]
                .partial_cmp(&eig.eigenvalues[a])
                .unwrap_or(Ordering::Equal)
        });

        let values = Array1::from_iter(order.iter().map(|&i| eig.eigenvalues[i]));
        let vectors =
            Array2::from_shape_fn((nrows, nrows), |(i, j)| eig.eigenvectors[(i, order[j])]);

        Ok(SymmetricEig { values, vectors })
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn vectors(&self) -> &Array2<f64> {
        &self.vectors
    }
}

/// Gram matrix `xᵀ · x`, symmetric and positive semi-definite. This is the
/// (unnormalized) covariance matrix of the columns of `x`.
pub fn gram(x: ArrayView2<f64>) -> Array2<f64> {
    x.t().dot(&x)
}

use anyhow::{anyhow, bail};
use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use nshare::IntoNalgebra;

/// Least-squares solution of `a · x ≈ b` via SVD.
///
/// Works for overdetermined, square, and rank-deficient systems; for the
/// rank-deficient case the minimum-norm solution is returned.
pub fn lstsq(a: ArrayView2<f64>, b: ArrayView1<f64>) -> anyhow::Result<Array1<f64>> {
    if a.nrows() != b.len() {
        bail!(
            "right-hand side length ({}) does not match matrix rows ({})",
            b.len(),
            a.nrows()
        );
    }

    let matrix = a.into_nalgebra().clone_owned();
    let rhs = nalgebra::DVector::from_iterator(b.len(), b.iter().cloned());
    let svd = matrix.svd(true, true);
    let x = svd
        .solve(&rhs, 1.0e-12)
        .map_err(|e| anyhow!("least-squares solve failed: {}", e))?;
    Ok(Array1::from(x.as_slice().to_vec()))
}

/// A fitted line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits a straight line to `(x, y)` samples in the least-squares sense,
/// using the design matrix `[x | 1]`.
pub fn fit_line(x: ArrayView1<f64>, y: ArrayView1<f64>) -> anyhow::Result<LineFit> {
    if x.len() != y.len() {
        bail!(
            "x and y must have equal length (got {} and {})",
            x.len(),
            y.len()
        );
    }
    if x.len() < 2 {
        bail!("need at least two samples to fit a line");
    }

    let mut design = Array2::ones((x.len(), 2));
    for (i, &xi) in x.iter().enumerate() {
        design[[i, 0]] = xi;
    }

    let coefficients = lstsq(design.view(), y)?;
    debug!(
        "fitted line: slope={} intercept={}",
        coefficients[0], coefficients[1]
    );
    Ok(LineFit {
        slope: coefficients[0],
        intercept: coefficients[1],
    })
}

mod eig;
mod qr;
mod svd;

pub use eig::{gram, Eig, SymmetricEig};
pub use qr::Qr;
pub use svd::Svd;

use anyhow::{anyhow, bail};
use ndarray::{Array1, ArrayView1, ArrayView2};
use nshare::IntoNalgebra;

/// Solves the square linear system `a · x = b` by LU decomposition.
pub fn solve(a: ArrayView2<f64>, b: ArrayView1<f64>) -> anyhow::Result<Array1<f64>> {
    let (nrows, ncols) = a.dim();
    if nrows != ncols {
        bail!("coefficient matrix must be square (got {}x{})", nrows, ncols);
    }
    if b.len() != nrows {
        bail!(
            "right-hand side length ({}) does not match matrix rows ({})",
            b.len(),
            nrows
        );
    }

    let matrix = a.into_nalgebra().clone_owned();
    let rhs = nalgebra::DVector::from_iterator(b.len(), b.iter().cloned());
    let x = matrix
        .lu()
        .solve(&rhs)
        .ok_or_else(|| anyhow!("matrix is singular"))?;
    Ok(Array1::from(x.as_slice().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_solve_known_system() {
        let a = array![[3.0, 8.0, -5.0], [3.0, -6.0, -7.0], [3.0, 4.0, 2.0]];
        let b = array![-1.0, -1.0, 3.0];
        let x = solve(a.view(), b.view()).unwrap();
        let residual = a.dot(&x) - &b;
        for &v in residual.iter() {
            assert_abs_diff_eq!(v, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_solve_rejects_singular_matrix() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];
        assert!(solve(a.view(), b.view()).is_err());
    }

    #[test]
    fn test_solve_rejects_bad_shapes() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![1.0, 2.0];
        assert!(solve(a.view(), b.view()).is_err());

        let square = array![[1.0, 0.0], [0.0, 1.0]];
        let long = array![1.0, 2.0, 3.0];
        assert!(solve(square.view(), long.view()).is_err());
    }
}

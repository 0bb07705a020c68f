use anyhow::anyhow;
use ndarray::{Array1, Array2, ArrayView2};
use nshare::{IntoNalgebra, IntoNdarray2};

/// Thin singular value decomposition of a dense matrix.
pub struct Svd {
    u: Array2<f64>,
    s: Array1<f64>,
    vt: Array2<f64>,
}

impl Svd {
    pub fn new(matrix: ArrayView2<f64>) -> anyhow::Result<Self> {
        let m = matrix.into_nalgebra().clone_owned();
        let svd = m.svd(true, true);
        let u = svd
            .u
            .ok_or_else(|| anyhow!("SVD did not produce the U factor"))?;
        let vt = svd
            .v_t
            .ok_or_else(|| anyhow!("SVD did not produce the V^T factor"))?;

        Ok(Svd {
            u: u.into_ndarray2().into_owned(),
            s: Array1::from(svd.singular_values.as_slice().to_vec()),
            vt: vt.into_ndarray2().into_owned(),
        })
    }

    pub fn u(&self) -> &Array2<f64> {
        &self.u
    }

    pub fn s(&self) -> &Array1<f64> {
        &self.s
    }

    pub fn vt(&self) -> &Array2<f64> {
        &self.vt
    }

    // Reconstruct the original matrix
    pub fn reconstruct(&self) -> Array2<f64> {
        let s_diag = Array2::from_diag(&self.s);
        self.u.dot(&s_diag).dot(&self.vt)
    }
}

use ndarray::{Array2, ArrayView2};
use nshare::{IntoNalgebra, IntoNdarray2};

/// QR decomposition: `a = q · r` with `q` orthonormal and `r` upper
/// triangular.
pub struct Qr {
    q: Array2<f64>,
    r: Array2<f64>,
}

impl Qr {
    pub fn new(matrix: ArrayView2<f64>) -> Self {
        let m = matrix.into_nalgebra().clone_owned();
        let (q, r) = m.qr().unpack();
        Qr {
            q: q.into_ndarray2().into_owned(),
            r: r.into_ndarray2().into_owned(),
        }
    }

    pub fn q(&self) -> &Array2<f64> {
        &self.q
    }

    pub fn r(&self) -> &Array2<f64> {
        &self.r
    }
}

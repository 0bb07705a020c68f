use anyhow::bail;
use ndarray::{Array1, ArrayView1};

use crate::utils::FloatOps;

/// Scalar coefficient of the orthogonal projection of `v` onto `u`,
/// `v·u / u·u`.
pub fn projection_coefficient<T: FloatOps>(
    v: ArrayView1<T>,
    u: ArrayView1<T>,
) -> anyhow::Result<T> {
    if v.len() != u.len() {
        bail!(
            "vectors must have equal length (got {} and {})",
            v.len(),
            u.len()
        );
    }

    let max_abs = u.iter().fold(T::zero(), |m, &y| m.max(y.abs()));
    if max_abs == T::zero() {
        bail!("cannot project onto the zero vector");
    }

    // Scale u by its largest component so small but valid directions do not
    // underflow out of the quotient.
    let mut dot_vu = T::zero();
    let mut dot_uu = T::zero();
    for (&x, &y) in v.iter().zip(u.iter()) {
        let scaled = y / max_abs;
        dot_vu = dot_vu + x * scaled;
        dot_uu = dot_uu + scaled * scaled;
    }

    Ok(dot_vu / dot_uu / max_abs)
}

/// Orthogonal projection of `v` onto the line spanned by `u`.
pub fn project_onto<T: FloatOps>(v: ArrayView1<T>, u: ArrayView1<T>) -> anyhow::Result<Array1<T>> {
    let coefficient = projection_coefficient(v, u)?;
    Ok(u.mapv(|x| x * coefficient))
}

use ndarray::{Array2, ArrayView1, ArrayView2};
use num_traits::{Float, FromPrimitive, ToPrimitive};
use rayon::prelude::*;

use crate::utils::{Direction, FloatOps};

pub trait SimilarityMeasure {
    fn calculate<T>(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> f64
    where
        T: Float + FromPrimitive + ToPrimitive;
}

/// Cosine of the angle between two vectors; 0.0 when either vector is
/// (numerically) zero.
pub struct CosineSimilarity;

impl SimilarityMeasure for CosineSimilarity {
    fn calculate<T>(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> f64
    where
        T: Float + FromPrimitive + ToPrimitive,
    {
        let (dot, norm_a, norm_b) = a.iter().zip(b.iter()).fold(
            (T::zero(), T::zero(), T::zero()),
            |(dot, na, nb), (&x, &y)| (dot + x * y, na + x * x, nb + y * y),
        );

        let norm_product = (norm_a * norm_b).sqrt();
        if norm_product > T::epsilon() {
            (dot / norm_product).to_f64().unwrap()
        } else {
            0.0
        }
    }
}

/// Computes the dense pairwise similarity matrix over the rows or columns of
/// `matrix`. Entry (i, j) is the similarity of lane i and lane j, so the
/// result is symmetric for symmetric measures.
pub fn pairwise<T, M>(matrix: ArrayView2<T>, measure: &M, direction: Direction) -> Array2<f64>
where
    T: FloatOps,
    M: SimilarityMeasure + Sync,
{
    let lanes: Vec<ArrayView1<T>> = match direction {
        Direction::Row => matrix.rows().into_iter().collect(),
        Direction::Column => matrix.columns().into_iter().collect(),
    };
    let n = lanes.len();

    let flat: Vec<f64> = (0..n * n)
        .into_par_iter()
        .map(|idx| measure.calculate(lanes[idx / n], lanes[idx % n]))
        .collect();

    Array2::from_shape_vec((n, n), flat).expect("pairwise result shape is n x n by construction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_cosine_of_parallel_and_orthogonal_vectors() {
        let a = array![1.0, 0.0];
        let b = array![2.0, 0.0];
        let c = array![0.0, 3.0];
        assert_abs_diff_eq!(
            CosineSimilarity.calculate(a.view(), b.view()),
            1.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            CosineSimilarity.calculate(a.view(), c.view()),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cosine_of_opposite_vectors() {
        let a = array![1.0, 2.0];
        let b = array![-1.0, -2.0];
        assert_abs_diff_eq!(
            CosineSimilarity.calculate(a.view(), b.view()),
            -1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cosine_of_zero_vector_is_zero() {
        let a = array![0.0, 0.0];
        let b = array![1.0, 1.0];
        assert_abs_diff_eq!(CosineSimilarity.calculate(a.view(), b.view()), 0.0);
    }

    #[test]
    fn test_pairwise_columns() {
        let m = array![[1.0, 0.0, 1.0], [0.0, 1.0, 1.0]];
        let sim = pairwise(m.view(), &CosineSimilarity, Direction::Column);
        assert_eq!(sim.dim(), (3, 3));
        // Unit diagonal, symmetric off-diagonal.
        for i in 0..3 {
            assert_abs_diff_eq!(sim[[i, i]], 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(sim[[0, 1]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sim[[0, 2]], 1.0 / 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(sim[[0, 2]], sim[[2, 0]], epsilon = 1e-12);
    }

    #[test]
    fn test_pairwise_rows_shape() {
        let m = array![[1.0, 0.0, 1.0], [0.0, 1.0, 1.0]];
        let sim = pairwise(m.view(), &CosineSimilarity, Direction::Row);
        assert_eq!(sim.dim(), (2, 2));
    }
}

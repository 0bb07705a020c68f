//! Random integer-valued test matrices from an injected generator. Callers
//! pass their own `Rng` so results stay reproducible under a fixed seed.

use std::ops::Range;

use ndarray::{Array1, Array2};
use rand::Rng;

/// Matrix with entries drawn uniformly from `range`, stored as floats.
pub fn random_int_matrix<R: Rng>(
    rng: &mut R,
    shape: (usize, usize),
    range: Range<i32>,
) -> Array2<f64> {
    Array2::from_shape_fn(shape, |_| rng.random_range(range.clone()) as f64)
}

/// Vector with entries drawn uniformly from `range`, stored as floats.
pub fn random_int_vector<R: Rng>(
    rng: &mut R,
    len: usize,
    range: Range<i32>,
) -> Array1<f64> {
    Array1::from_shape_fn(len, |_| rng.random_range(range.clone()) as f64)
}

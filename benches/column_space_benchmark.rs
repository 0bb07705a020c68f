use std::time::Duration;

use column_algebra::basis::column_space;
use column_algebra::random::random_int_matrix;
use column_algebra::rref::row_reduce;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Clone)]
pub struct DenseMatrixConfig {
    seed: u64,
    matrix_sizes: Vec<(usize, usize)>,
    measurement_time: u64,
    sample_size: usize,
}

impl Default for DenseMatrixConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            matrix_sizes: vec![(10, 10), (50, 50), (100, 50), (200, 100), (200, 200)],
            measurement_time: 5,
            sample_size: 20,
        }
    }
}

fn create_dense_matrix(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_int_matrix(&mut rng, (rows, cols), -9..10)
}

pub fn bench_row_reduce(c: &mut Criterion) {
    let config = DenseMatrixConfig::default();
    let mut group = c.benchmark_group("Row_Reduce");
    group.measurement_time(Duration::from_secs(config.measurement_time));
    group.sample_size(config.sample_size);

    for &(rows, cols) in config.matrix_sizes.iter() {
        let seed = config.seed + (rows * cols) as u64;
        let matrix = create_dense_matrix(rows, cols, seed);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &matrix,
            |b, m| b.iter(|| row_reduce(m.view())),
        );
    }
    group.finish();
}

pub fn bench_column_space(c: &mut Criterion) {
    let config = DenseMatrixConfig::default();
    let mut group = c.benchmark_group("Column_Space");
    group.measurement_time(Duration::from_secs(config.measurement_time));
    group.sample_size(config.sample_size);

    for &(rows, cols) in config.matrix_sizes.iter() {
        let seed = config.seed + (rows * cols) as u64;
        let matrix = create_dense_matrix(rows, cols, seed);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &matrix,
            |b, m| b.iter(|| column_space(m.view()).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_row_reduce, bench_column_space);
criterion_main!(benches);

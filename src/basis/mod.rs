//! # Column Space Basis Extraction
//!
//! Derives a basis for the column space of a dense matrix from the pivot
//! columns identified by row reduction. The pivot columns of the *original*
//! matrix (not the reduced one) form the basis, and the number of pivots is
//! the rank of the matrix.

use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::rref::row_reduce;
use crate::utils::FloatOps;

/// Validation failure raised while selecting pivot columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasisError {
    /// A pivot index referenced a column the matrix does not have.
    InvalidIndex { index: usize, ncols: usize },
    /// The same column was requested twice.
    DuplicateIndex(usize),
    /// The matrix has no rows or no columns.
    DimensionMismatch { nrows: usize, ncols: usize },
}

impl fmt::Display for BasisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BasisError::InvalidIndex { index, ncols } => {
                write!(
                    f,
                    "pivot column index {} is out of range for a matrix with {} columns",
                    index, ncols
                )
            }
            BasisError::DuplicateIndex(index) => {
                write!(f, "pivot column index {} appears more than once", index)
            }
            BasisError::DimensionMismatch { nrows, ncols } => {
                write!(
                    f,
                    "matrix must have at least one row and one column (got {}x{})",
                    nrows, ncols
                )
            }
        }
    }
}

impl std::error::Error for BasisError {}

/// A basis for the column space of a matrix.
///
/// Holds the selected columns in the order they were requested and the
/// dimension of the spanned space (the pivot count). Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBasis<T> {
    vectors: Array2<T>,
    dimension: usize,
}

impl<T> ColumnBasis<T> {
    /// The basis vectors as an R×k matrix, one vector per column.
    pub fn vectors(&self) -> &Array2<T> {
        &self.vectors
    }

    /// Dimension of the spanned space, equal to the number of basis vectors.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Selects the given columns of `matrix` as basis vectors of its column space.
///
/// This is a pure projection: each entry of `pivot_columns` picks out the full
/// column of `matrix` at that index, in the order supplied. Pivot order
/// corresponds to variable order in the reduced system, so the supplied order
/// is preserved exactly, even when it is not ascending.
///
/// # Parameters
/// - `matrix`: R×C input, R ≥ 1, C ≥ 1
/// - `pivot_columns`: distinct column indices, each < C; may be empty
///   (the zero-matrix case), producing an R×0 basis
///
/// # Errors
/// - [`BasisError::DimensionMismatch`] when `matrix` has no rows or columns
/// - [`BasisError::InvalidIndex`] when an index is out of range
/// - [`BasisError::DuplicateIndex`] when an index repeats
pub fn extract_basis<T: Clone>(
    matrix: ArrayView2<T>,
    pivot_columns: &[usize],
) -> Result<ColumnBasis<T>, BasisError> {
    let (nrows, ncols) = matrix.dim();
    if nrows == 0 || ncols == 0 {
        return Err(BasisError::DimensionMismatch { nrows, ncols });
    }

    let mut seen = vec![false; ncols];
    for &index in pivot_columns {
        if index >= ncols {
            return Err(BasisError::InvalidIndex { index, ncols });
        }
        if seen[index] {
            return Err(BasisError::DuplicateIndex(index));
        }
        seen[index] = true;
    }

    let vectors = Array2::from_shape_fn((nrows, pivot_columns.len()), |(i, j)| {
        matrix[[i, pivot_columns[j]]].clone()
    });

    Ok(ColumnBasis {
        dimension: pivot_columns.len(),
        vectors,
    })
}

/// Computes a basis for the column space of `matrix`.
///
/// Row-reduces the matrix to find its pivot columns, then selects those
/// columns of the original matrix via [`extract_basis`]. The basis dimension
/// equals the rank of the matrix.
pub fn column_space<T: FloatOps>(matrix: ArrayView2<T>) -> anyhow::Result<ColumnBasis<T>> {
    let echelon = row_reduce(matrix);
    let basis = extract_basis(matrix, echelon.pivots())?;
    Ok(basis)
}

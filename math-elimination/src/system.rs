//! Augmented linear systems
//!
//! An [`AugmentedSystem`] stores `Ax = b` as a single `n × (n+1)` matrix whose
//! last column is the right-hand side. Solvers never mutate it: each solve
//! works on its own copy obtained through [`AugmentedSystem::working_copy`].

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};

/// A square linear system stored as an augmented matrix `[A | b]`
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSystem<T: RealField> {
    matrix: Array2<T>,
}

impl<T: RealField> AugmentedSystem<T> {
    /// Wrap an `n × (n+1)` augmented matrix
    ///
    /// Fails with [`SolverError::InvalidDimension`] when the matrix has no rows
    /// or is not exactly one column wider than it is tall.
    pub fn new(matrix: Array2<T>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows == 0 || cols != rows + 1 {
            return Err(SolverError::InvalidDimension { rows, cols });
        }
        Ok(Self { matrix })
    }

    /// Build the augmented matrix from a square coefficient matrix and a RHS
    pub fn from_parts(a: &Array2<T>, b: &Array1<T>) -> Result<Self> {
        let (rows, cols) = a.dim();
        if rows == 0 || rows != cols {
            return Err(SolverError::InvalidDimension { rows, cols });
        }
        if b.len() != rows {
            return Err(SolverError::DimensionMismatch {
                expected: rows,
                got: b.len(),
            });
        }

        let n = rows;
        let mut matrix = Array2::zeros((n, n + 1));
        matrix.slice_mut(s![.., ..n]).assign(a);
        matrix.column_mut(n).assign(b);
        Ok(Self { matrix })
    }

    /// Build from row-major rows, each holding `n` coefficients and the RHS
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        if n == 0 || rows.iter().any(|row| row.len() != n + 1) {
            return Err(SolverError::InvalidDimension {
                rows: n,
                cols: widest,
            });
        }

        let data: Vec<T> = rows.into_iter().flatten().collect();
        let matrix = Array2::from_shape_vec((n, n + 1), data)
            .map_err(|_| SolverError::InvalidDimension { rows: n, cols: widest })?;
        Ok(Self { matrix })
    }

    /// Number of equations (and unknowns)
    #[inline]
    pub fn n(&self) -> usize {
        self.matrix.nrows()
    }

    /// Entry at `(row, col)`, where `col == n` addresses the RHS
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.matrix.get((row, col)).copied()
    }

    /// The full augmented matrix
    pub fn matrix(&self) -> &Array2<T> {
        &self.matrix
    }

    /// View of the `n × n` coefficient block
    pub fn coefficients(&self) -> ArrayView2<'_, T> {
        self.matrix.slice(s![.., ..self.n()])
    }

    /// View of the right-hand side column
    pub fn rhs(&self) -> ArrayView1<'_, T> {
        self.matrix.column(self.n())
    }

    /// Deep copy of the augmented matrix for in-place elimination
    pub fn working_copy(&self) -> Array2<T> {
        self.matrix.clone()
    }

    /// Consume the system and return the augmented matrix
    pub fn into_matrix(self) -> Array2<T> {
        self.matrix
    }

    /// Copy of the coefficient block with column `j` replaced by the RHS
    pub fn with_rhs_in_column(&self, j: usize) -> Result<Array2<T>> {
        let n = self.n();
        if j >= n {
            return Err(SolverError::ColumnOutOfRange { column: j, n });
        }
        let mut a = self.coefficients().to_owned();
        a.column_mut(j).assign(&self.rhs());
        Ok(a)
    }

    /// Residual vector `A·x − b`
    pub fn residual(&self, x: &Array1<T>) -> Result<Array1<T>> {
        if x.len() != self.n() {
            return Err(SolverError::DimensionMismatch {
                expected: self.n(),
                got: x.len(),
            });
        }
        Ok(self.coefficients().dot(x) - &self.rhs())
    }

    /// Relative residual `‖A·x − b‖₂ / ‖b‖₂`
    ///
    /// Falls back to the absolute residual norm when `b` is the zero vector.
    pub fn relative_residual(&self, x: &Array1<T>) -> Result<T> {
        let r_norm = vector_norm(self.residual(x)?.view());
        let b_norm = vector_norm(self.rhs());
        if b_norm == T::zero() {
            Ok(r_norm)
        } else {
            Ok(r_norm / b_norm)
        }
    }
}

/// Vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
fn vector_norm<T: RealField>(x: ArrayView1<'_, T>) -> T {
    x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi).sqrt()
}

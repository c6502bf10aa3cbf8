//! Error types for the elimination solvers.
//!
//! Every failure is reported through [`SolverError`]; numeric sentinels such as
//! `NaN` solutions are never returned.

use thiserror::Error;

/// Errors that can occur while building or solving a linear system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A required pivot is zero and the active pivoting policy found no
    /// nonzero alternative.
    #[error("matrix is singular: zero pivot at elimination step {step}")]
    SingularMatrix {
        /// Elimination step (diagonal index) where the zero pivot was met
        step: usize,
    },

    /// The coefficient determinant is zero (Cramer's rule).
    #[error("system has no unique solution: determinant is zero")]
    NoUniqueSolution,

    /// The matrix shape is not usable: no rows, a wrong augmented width,
    /// a non-square coefficient block, or ragged rows.
    #[error("invalid matrix dimensions: {rows} rows x {cols} columns")]
    InvalidDimension {
        /// Number of rows supplied
        rows: usize,
        /// Number of columns supplied (the widest row for ragged input)
        cols: usize,
    },

    /// A vector length does not match the system size.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// A column index lies outside the coefficient block.
    #[error("column {column} out of range for a system of size {n}")]
    ColumnOutOfRange {
        /// Requested column
        column: usize,
        /// System size
        n: usize,
    },

    /// A method name did not match any known solver.
    #[error("unknown solver method: {0}")]
    UnknownMethod(String),
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if the system has no unique solution.
    ///
    /// This includes `SingularMatrix` and `NoUniqueSolution`.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            SolverError::SingularMatrix { .. } | SolverError::NoUniqueSolution
        )
    }

    /// Returns `true` if this is a shape-related error.
    ///
    /// This includes `InvalidDimension`, `DimensionMismatch` and `ColumnOutOfRange`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::InvalidDimension { .. }
                | SolverError::DimensionMismatch { .. }
                | SolverError::ColumnOutOfRange { .. }
        )
    }
}

//! Determinants by Gaussian elimination
//!
//! The determinant is the product of the pivots produced by forward
//! elimination. Without row exchanges a zero pivot ends the reduction early and
//! the determinant is reported as zero; with partial pivoting every effective
//! exchange flips the sign.

use crate::error::{Result, SolverError};
use crate::pivot::{PivotStrategy, pivot_in_place};
use crate::traits::RealField;
use ndarray::Array2;

/// Determinant of a square matrix, reduced without row interchange
///
/// A zero pivot short-circuits to `0`. The input is never modified.
pub fn determinant<T: RealField>(a: &Array2<T>) -> Result<T> {
    determinant_with(a, PivotStrategy::None, T::zero())
}

/// Determinant of a square matrix with an explicit pivoting policy
///
/// A pivot within `tolerance` of zero short-circuits to `0`.
pub fn determinant_with<T: RealField>(
    a: &Array2<T>,
    strategy: PivotStrategy,
    tolerance: T,
) -> Result<T> {
    let (rows, cols) = a.dim();
    if rows == 0 || rows != cols {
        return Err(SolverError::InvalidDimension { rows, cols });
    }

    let n = rows;
    let mut m = a.clone();
    let mut det = T::one();

    for k in 0..n {
        let pivot_row = match pivot_in_place(&mut m, strategy, k, tolerance) {
            Ok(row) => row,
            Err(SolverError::SingularMatrix { .. }) => return Ok(T::zero()),
            Err(err) => return Err(err),
        };
        if pivot_row != k {
            det = -det;
        }

        let pivot = m[[k, k]];
        det *= pivot;

        for i in (k + 1)..n {
            let factor = m[[i, k]] / pivot;
            for j in k..n {
                let m_kj = m[[k, j]];
                m[[i, j]] -= factor * m_kj;
            }
        }
    }

    Ok(det)
}

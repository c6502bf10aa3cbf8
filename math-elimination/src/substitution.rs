//! Forward and back substitution over triangular systems

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Forward substitution with a unit lower-triangular matrix: solve `L·y = b`
///
/// The diagonal of `l` is assumed to be one and is never read; entries above
/// the diagonal are ignored.
pub fn forward_substitution_unit<T: RealField>(
    l: ArrayView2<'_, T>,
    b: ArrayView1<'_, T>,
) -> Array1<T> {
    let n = b.len();
    let mut y = b.to_owned();

    for i in 0..n {
        for j in 0..i {
            let l_ij = l[[i, j]];
            let y_j = y[j];
            y[i] -= l_ij * y_j;
        }
    }

    y
}

/// Back substitution with an upper-triangular matrix: solve `U·x = rhs`
///
/// Only the diagonal and the entries above it are read, so the leading block of
/// a forward-eliminated augmented matrix can be passed directly. A diagonal
/// entry within `tolerance` of zero is [`SolverError::SingularMatrix`].
pub fn back_substitution<T: RealField>(
    u: ArrayView2<'_, T>,
    rhs: ArrayView1<'_, T>,
    tolerance: T,
) -> Result<Array1<T>> {
    let n = rhs.len();
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..n {
            sum -= u[[i, j]] * x[j];
        }

        let u_ii = u[[i, i]];
        if u_ii.is_zero_approx(tolerance) {
            log::debug!("zero diagonal entry at row {i} during back substitution");
            return Err(SolverError::SingularMatrix { step: i });
        }
        x[i] = sum / u_ii;
    }

    Ok(x)
}

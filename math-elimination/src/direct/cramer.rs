//! Cramer's rule
//!
//! `x[j] = det(A_j) / det(A)`, where `A_j` is `A` with column `j` replaced by
//! the RHS. Needs `n + 1` determinant evaluations, `O(n^4)` overall, so it is
//! meant for small systems and for cross-checking the elimination solvers.

use super::EliminationConfig;
use crate::determinant::determinant_with;
use crate::error::{Result, SolverError};
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::Array1;

/// Solve `Ax = b` by Cramer's rule
///
/// The determinants are reduced with `config.pivoting`; a coefficient
/// determinant within `config.pivot_tolerance` of zero is
/// [`SolverError::NoUniqueSolution`].
pub fn cramer_solve<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>> {
    let n = system.n();
    let a = system.coefficients().to_owned();

    let det_a = determinant_with(&a, config.pivoting, config.pivot_tolerance)?;
    if det_a.is_zero_approx(config.pivot_tolerance) {
        log::debug!("coefficient determinant is zero, no unique solution");
        return Err(SolverError::NoUniqueSolution);
    }
    log::trace!("det(A) = {det_a}");

    let mut x = Array1::zeros(n);
    for j in 0..n {
        let a_j = system.with_rhs_in_column(j)?;
        x[j] = determinant_with(&a_j, config.pivoting, config.pivot_tolerance)? / det_a;
    }

    Ok(x)
}

//! Gaussian elimination
//!
//! Forward elimination reduces the augmented matrix to upper-triangular form,
//! then back substitution recovers the unknowns. With partial pivoting each
//! step first moves the largest remaining candidate onto the diagonal,
//! exchanging entire rows including the RHS.

use super::EliminationConfig;
use crate::error::Result;
use crate::pivot::pivot_in_place;
use crate::substitution::back_substitution;
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::{Array1, Array2, s};

/// Reduce a copy of the augmented matrix to upper-triangular form
///
/// Returns the reduced `n × (n+1)` matrix. The last diagonal entry is not a
/// pivot here; a zero there is reported by the substitution pass.
pub fn forward_eliminate<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &EliminationConfig<T>,
) -> Result<Array2<T>> {
    let n = system.n();
    let mut m = system.working_copy();

    for k in 0..n - 1 {
        pivot_in_place(&mut m, config.pivoting, k, config.pivot_tolerance)?;

        let pivot = m[[k, k]];
        for i in (k + 1)..n {
            let factor = m[[i, k]] / pivot;
            for j in k..=n {
                let m_kj = m[[k, j]];
                m[[i, j]] -= factor * m_kj;
            }
        }
    }

    Ok(m)
}

/// Solve `Ax = b` by Gaussian elimination and back substitution
pub fn gauss_solve<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>> {
    let n = system.n();
    let reduced = forward_eliminate(system, config)?;
    back_substitution(
        reduced.slice(s![.., ..n]),
        reduced.column(n),
        config.pivot_tolerance,
    )
}

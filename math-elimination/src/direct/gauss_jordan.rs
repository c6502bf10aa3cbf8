//! Gauss-Jordan elimination
//!
//! Every pivot row is normalized and its column cleared from all other rows,
//! so the coefficient block ends as the identity and the RHS column holds the
//! solution directly.

use super::EliminationConfig;
use crate::error::Result;
use crate::pivot::pivot_in_place;
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Reduce a copy of the augmented matrix to `[I | x]`
pub fn gauss_jordan_reduce<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &EliminationConfig<T>,
) -> Result<Array2<T>> {
    let n = system.n();
    let mut m = system.working_copy();

    for k in 0..n {
        pivot_in_place(&mut m, config.pivoting, k, config.pivot_tolerance)?;

        let pivot = m[[k, k]];
        for j in k..=n {
            m[[k, j]] /= pivot;
        }

        for i in (0..n).filter(|&i| i != k) {
            let factor = m[[i, k]];
            for j in k..=n {
                let m_kj = m[[k, j]];
                m[[i, j]] -= factor * m_kj;
            }
        }
    }

    Ok(m)
}

/// Solve `Ax = b` by Gauss-Jordan elimination
pub fn gauss_jordan_solve<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>> {
    let n = system.n();
    let reduced = gauss_jordan_reduce(system, config)?;
    Ok(reduced.column(n).to_owned())
}

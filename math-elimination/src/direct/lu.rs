//! LU decomposition solver
//!
//! Factors the coefficient matrix as `P·A = L·U` with `L` unit lower
//! triangular and `U` upper triangular, optionally with partial pivoting.
//! The factors are kept separately so callers can inspect them, reuse them for
//! further right-hand sides, or derive the determinant and inverse.

use super::EliminationConfig;
use crate::error::{Result, SolverError};
use crate::permutation::Permutation;
use crate::pivot::pivot_in_place;
use crate::substitution::{back_substitution, forward_substitution_unit};
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU factorization result
///
/// Stores L and U factors along with the row permutation, so that `P·A = L·U`
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Unit lower-triangular factor
    pub l: Array2<T>,
    /// Upper-triangular factor
    pub u: Array2<T>,
    /// Row exchanges applied to `A`
    pub permutation: Permutation,
    /// Matrix dimension
    pub n: usize,
}

/// Solution of an augmented system together with its LU factors
#[derive(Debug, Clone)]
pub struct LuSolution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Factors the solution was computed from
    pub factors: LuFactorization<T>,
}

impl<T: RealField> LuFactorization<T> {
    /// Solve Ax = b using the pre-computed LU factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        if b.len() != self.n {
            return Err(SolverError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        // Pb, then L·y = Pb
        let pb = self.permutation.apply(b.view());
        let y = forward_substitution_unit(self.l.view(), pb.view());

        // U·x = y
        back_substitution(self.u.view(), y.view(), T::zero())
    }

    /// Determinant of `A`: `sign(P) · Π U[k][k]`
    pub fn determinant(&self) -> T {
        self.u
            .diag()
            .iter()
            .fold(self.permutation.sign::<T>(), |det, &u_kk| det * u_kk)
    }

    /// Inverse of `A`, one column per unit right-hand side
    pub fn inverse(&self) -> Result<Array2<T>> {
        let mut inv = Array2::zeros((self.n, self.n));
        for j in 0..self.n {
            let mut e = Array1::zeros(self.n);
            e[j] = T::one();
            let column = self.solve(&e)?;
            inv.column_mut(j).assign(&column);
        }
        Ok(inv)
    }

    /// The product `L·U`, equal to `P·A` up to rounding
    pub fn reconstruct(&self) -> Array2<T> {
        self.l.dot(&self.u)
    }
}

/// Compute the LU factorization of a square matrix
///
/// With partial pivoting, a row exchange at step `k` also swaps the already
/// computed part of `L` (columns `< k`) and the permutation entries.
pub fn lu_factorize<T: RealField>(
    a: &Array2<T>,
    config: &EliminationConfig<T>,
) -> Result<LuFactorization<T>> {
    let (rows, cols) = a.dim();
    if rows == 0 || rows != cols {
        return Err(SolverError::InvalidDimension { rows, cols });
    }

    let n = rows;
    let mut m = a.clone();
    let mut l = Array2::<T>::eye(n);
    let mut u = Array2::<T>::zeros((n, n));
    let mut permutation = Permutation::identity(n);

    for k in 0..n {
        let pivot_row = pivot_in_place(&mut m, config.pivoting, k, config.pivot_tolerance)?;
        if pivot_row != k {
            permutation.swap(k, pivot_row);
            for j in 0..k {
                l.swap([k, j], [pivot_row, j]);
            }
        }

        for j in k..n {
            u[[k, j]] = m[[k, j]];
        }

        // Compute multipliers and eliminate
        let u_kk = u[[k, k]];
        for i in (k + 1)..n {
            let l_ik = m[[i, k]] / u_kk;
            l[[i, k]] = l_ik;

            for j in k..n {
                let update = l_ik * u[[k, j]];
                m[[i, j]] -= update;
            }
        }
    }

    Ok(LuFactorization {
        l,
        u,
        permutation,
        n,
    })
}

/// Factor the coefficient block and solve for the RHS, keeping the factors
pub fn lu_decompose<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &EliminationConfig<T>,
) -> Result<LuSolution<T>> {
    let factors = lu_factorize(&system.coefficients().to_owned(), config)?;
    let x = factors.solve(&system.rhs().to_owned())?;
    Ok(LuSolution { x, factors })
}

/// Solve Ax = b using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>> {
    lu_decompose(system, config).map(|solution| solution.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_matrix_eq(a: &Array2<f64>, b: &Array2<f64>) {
        assert_eq!(a.dim(), b.dim());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_solve_two_by_two() {
        let s = AugmentedSystem::new(array![[2.0_f64, 1.0, 5.0], [1.0, 3.0, 10.0]]).unwrap();

        for config in [EliminationConfig::plain(), EliminationConfig::partial()] {
            let x = lu_solve(&s, &config).expect("LU solve should succeed");
            assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
            assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_factor_identity() {
        let a = array![[2.0_f64, 1.0, 1.0], [4.0, -6.0, 0.0], [-2.0, 7.0, 2.0]];

        for config in [EliminationConfig::plain(), EliminationConfig::partial()] {
            let lu = lu_factorize(&a, &config).expect("Factorization should succeed");

            let pa = lu.permutation.to_matrix::<f64>().dot(&a);
            assert_matrix_eq(&lu.reconstruct(), &pa);

            for i in 0..3 {
                assert_eq!(lu.l[[i, i]], 1.0);
                for j in (i + 1)..3 {
                    assert_eq!(lu.l[[i, j]], 0.0);
                }
                for j in 0..i {
                    assert_eq!(lu.u[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_partial_pivot_records_permutation() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let lu = lu_factorize(&a, &EliminationConfig::partial()).unwrap();

        assert_eq!(lu.permutation.indices(), &[1, 0]);
        assert_relative_eq!(lu.l[[1, 0]], 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(lu.u[[0, 0]], 3.0);
        assert_relative_eq!(lu.u[[1, 1]], 2.0 - 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_factorize_and_solve() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];

        let factorization =
            lu_factorize(&a, &EliminationConfig::partial()).expect("Factorization should succeed");

        // Solve multiple RHS
        let b1 = array![1.0_f64, 2.0, 3.0];
        let x1 = factorization.solve(&b1).expect("Solve should succeed");

        let ax1 = a.dot(&x1);
        for i in 0..3 {
            assert_relative_eq!(ax1[i], b1[i], epsilon = 1e-10);
        }

        let b2 = array![4.0_f64, 5.0, 6.0];
        let x2 = factorization.solve(&b2).expect("Solve should succeed");

        let ax2 = a.dot(&x2);
        for i in 0..3 {
            assert_relative_eq!(ax2[i], b2[i], epsilon = 1e-10);
        }

        assert_eq!(
            factorization.solve(&array![1.0_f64]).unwrap_err(),
            SolverError::DimensionMismatch { expected: 3, got: 1 }
        );
    }

    #[test]
    fn test_determinant_and_inverse() {
        let a = array![[0.0_f64, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
        let lu = lu_factorize(&a, &EliminationConfig::partial()).unwrap();

        // 0*(1-0) - 2*(1-0) + 1*(0-3)
        assert_relative_eq!(lu.determinant(), -5.0, epsilon = 1e-12);

        let inv = lu.inverse().unwrap();
        assert_matrix_eq(&a.dot(&inv), &Array2::eye(3));
    }

    #[test]
    fn test_lu_identity() {
        let n = 5;
        let s = AugmentedSystem::from_parts(
            &Array2::eye(n),
            &Array1::from_iter((1..=n).map(|i| i as f64)),
        )
        .unwrap();

        let solution = lu_decompose(&s, &EliminationConfig::plain()).unwrap();
        for i in 0..n {
            assert_relative_eq!(solution.x[i], (i + 1) as f64, epsilon = 1e-12);
        }
        assert_eq!(solution.factors.permutation.swap_count(), 0);
        assert_relative_eq!(solution.factors.determinant(), 1.0);
    }

    #[test]
    fn test_lu_singular() {
        let s = AugmentedSystem::new(array![[1.0_f64, 1.0, 2.0], [0.0, 0.0, 0.0]]).unwrap();

        for config in [EliminationConfig::plain(), EliminationConfig::partial()] {
            assert_eq!(
                lu_solve(&s, &config),
                Err(SolverError::SingularMatrix { step: 1 })
            );
        }

        let dependent = array![[1.0_f64, 2.0], [2.0, 4.0]];
        assert!(lu_factorize(&dependent, &EliminationConfig::partial()).is_err());
    }

    #[test]
    fn test_plain_lu_needs_nonzero_leading_entry() {
        let s = AugmentedSystem::new(array![[0.0_f64, 2.0, 4.0], [1.0, 1.0, 3.0]]).unwrap();

        assert_eq!(
            lu_solve(&s, &EliminationConfig::plain()),
            Err(SolverError::SingularMatrix { step: 0 })
        );

        let x = lu_solve(&s, &EliminationConfig::partial()).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_requires_square() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(
            lu_factorize(&a, &EliminationConfig::partial())
                .unwrap_err()
                .is_dimension_error()
        );
    }
}

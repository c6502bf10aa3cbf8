//! Direct solvers for linear systems
//!
//! This module provides the elimination-based solvers:
//! - [`gauss_solve`]: forward elimination followed by back substitution
//! - [`gauss_jordan_solve`]: full reduction to the identity, no substitution pass
//! - [`lu_solve`] / [`lu_decompose`]: `P·A = L·U` factorization, then two triangular solves
//! - [`cramer_solve`]: Cramer's rule through determinant reduction
//!
//! Each solver takes an [`EliminationConfig`] selecting the pivoting policy and
//! the magnitude below which a pivot counts as zero.

mod cramer;
mod gauss;
mod gauss_jordan;
mod lu;

pub use cramer::cramer_solve;
pub use gauss::{forward_eliminate, gauss_solve};
pub use gauss_jordan::{gauss_jordan_reduce, gauss_jordan_solve};
pub use lu::{LuFactorization, LuSolution, lu_decompose, lu_factorize, lu_solve};

use crate::pivot::PivotStrategy;
use crate::traits::RealField;

/// Elimination configuration shared by the direct solvers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EliminationConfig<T> {
    /// Row-exchange policy
    #[cfg_attr(feature = "serde", serde(default))]
    pub pivoting: PivotStrategy,
    /// Pivots with magnitude at or below this value are treated as zero
    /// (`0` means only exact zeros are rejected)
    #[cfg_attr(feature = "serde", serde(default))]
    pub pivot_tolerance: T,
}

impl<T: RealField> Default for EliminationConfig<T> {
    fn default() -> Self {
        Self {
            pivoting: PivotStrategy::Partial,
            pivot_tolerance: T::zero(),
        }
    }
}

impl<T: RealField> EliminationConfig<T> {
    /// Configuration with the given pivoting and exact-zero pivot detection
    pub fn new(pivoting: PivotStrategy) -> Self {
        Self {
            pivoting,
            pivot_tolerance: T::zero(),
        }
    }

    /// No row exchanges
    pub fn plain() -> Self {
        Self::new(PivotStrategy::None)
    }

    /// Partial pivoting
    pub fn partial() -> Self {
        Self::new(PivotStrategy::Partial)
    }

    /// Treat pivots with magnitude `<= tolerance` as zero
    pub fn with_pivot_tolerance(mut self, tolerance: T) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }
}

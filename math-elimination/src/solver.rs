//! Solver facade
//!
//! [`Method`] names the seven direct solvers; [`solve`] and
//! [`solve_with_config`] dispatch an [`AugmentedSystem`] to the selected one.

use crate::direct::{
    EliminationConfig, cramer_solve, gauss_jordan_solve, gauss_solve, lu_solve,
};
use crate::error::{Result, SolverError};
use crate::pivot::PivotStrategy;
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::Array1;
use std::fmt;
use std::str::FromStr;

/// Direct solution method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Method {
    /// Gaussian elimination without row exchanges
    Gauss,
    /// Gaussian elimination with partial pivoting
    #[default]
    GaussPartialPivot,
    /// Gauss-Jordan elimination without row exchanges
    GaussJordan,
    /// Gauss-Jordan elimination with partial pivoting
    GaussJordanPartialPivot,
    /// LU decomposition without row exchanges
    Lu,
    /// LU decomposition with partial pivoting
    LuPartialPivot,
    /// Cramer's rule
    Cramer,
}

impl Method {
    /// Every method, plain variants before their pivoted counterparts
    pub const ALL: [Method; 7] = [
        Method::Gauss,
        Method::GaussPartialPivot,
        Method::GaussJordan,
        Method::GaussJordanPartialPivot,
        Method::Lu,
        Method::LuPartialPivot,
        Method::Cramer,
    ];

    /// Pivoting policy the method runs with
    ///
    /// Cramer's rule uses the row-exchange-free determinant reducer, so a zero
    /// leading entry in `A` reports [`SolverError::NoUniqueSolution`].
    pub fn pivoting(&self) -> PivotStrategy {
        match self {
            Method::Gauss | Method::GaussJordan | Method::Lu | Method::Cramer => {
                PivotStrategy::None
            }
            Method::GaussPartialPivot
            | Method::GaussJordanPartialPivot
            | Method::LuPartialPivot => PivotStrategy::Partial,
        }
    }

    /// Stable kebab-case identifier
    pub fn name(&self) -> &'static str {
        match self {
            Method::Gauss => "gauss",
            Method::GaussPartialPivot => "gauss-partial-pivot",
            Method::GaussJordan => "gauss-jordan",
            Method::GaussJordanPartialPivot => "gauss-jordan-partial-pivot",
            Method::Lu => "lu",
            Method::LuPartialPivot => "lu-partial-pivot",
            Method::Cramer => "cramer",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Method::Gauss => "Gauss elimination",
            Method::GaussPartialPivot => "Gauss elimination with partial pivoting",
            Method::GaussJordan => "Gauss-Jordan elimination",
            Method::GaussJordanPartialPivot => "Gauss-Jordan elimination with partial pivoting",
            Method::Lu => "LU decomposition",
            Method::LuPartialPivot => "LU decomposition with partial pivoting",
            Method::Cramer => "Cramer's rule",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SolverError;

    /// Accepts the kebab-case names, case-insensitively, with `_` for `-` and
    /// `pivot` as shorthand for `partial-pivot`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "gauss" => Ok(Method::Gauss),
            "gauss-partial-pivot" | "gauss-pivot" => Ok(Method::GaussPartialPivot),
            "gauss-jordan" => Ok(Method::GaussJordan),
            "gauss-jordan-partial-pivot" | "gauss-jordan-pivot" => {
                Ok(Method::GaussJordanPartialPivot)
            }
            "lu" => Ok(Method::Lu),
            "lu-partial-pivot" | "lu-pivot" => Ok(Method::LuPartialPivot),
            "cramer" => Ok(Method::Cramer),
            _ => Err(SolverError::UnknownMethod(s.to_string())),
        }
    }
}

/// Facade configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T> {
    /// Solution method
    #[cfg_attr(feature = "serde", serde(default))]
    pub method: Method,
    /// Pivots with magnitude at or below this value are treated as zero
    #[cfg_attr(feature = "serde", serde(default))]
    pub pivot_tolerance: T,
}

impl<T: RealField> Default for SolverConfig<T> {
    fn default() -> Self {
        Self::new(Method::default())
    }
}

impl<T: RealField> SolverConfig<T> {
    /// Configuration for `method` with exact-zero pivot detection
    pub fn new(method: Method) -> Self {
        Self {
            method,
            pivot_tolerance: T::zero(),
        }
    }

    /// Treat pivots with magnitude `<= tolerance` as zero
    pub fn with_pivot_tolerance(mut self, tolerance: T) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Elimination settings derived from the method
    pub fn elimination(&self) -> EliminationConfig<T> {
        EliminationConfig::new(self.method.pivoting()).with_pivot_tolerance(self.pivot_tolerance)
    }
}

/// Solve `Ax = b` with the given method
pub fn solve<T: RealField>(system: &AugmentedSystem<T>, method: Method) -> Result<Array1<T>> {
    solve_with_config(system, &SolverConfig::new(method))
}

/// Solve `Ax = b` with an explicit configuration
pub fn solve_with_config<T: RealField>(
    system: &AugmentedSystem<T>,
    config: &SolverConfig<T>,
) -> Result<Array1<T>> {
    let elimination = config.elimination();
    log::debug!(
        "solving {n}x{n} system with {method}",
        n = system.n(),
        method = config.method
    );

    match config.method {
        Method::Gauss | Method::GaussPartialPivot => gauss_solve(system, &elimination),
        Method::GaussJordan | Method::GaussJordanPartialPivot => {
            gauss_jordan_solve(system, &elimination)
        }
        Method::Lu | Method::LuPartialPivot => lu_solve(system, &elimination),
        Method::Cramer => cramer_solve(system, &elimination),
    }
}

/// Run every method on the same system, in [`Method::ALL`] order
pub fn solve_all<T: RealField>(system: &AugmentedSystem<T>) -> Vec<(Method, Result<Array1<T>>)> {
    Method::ALL
        .iter()
        .map(|&method| (method, solve(system, method)))
        .collect()
}

//! Direct elimination solvers for dense linear systems
//!
//! This crate solves square systems `Ax = b` given as an augmented matrix
//! `[A | b]`, and computes the determinant-related quantities those methods
//! produce along the way.
//!
//! # Features
//!
//! - **Gaussian elimination**: forward elimination and back substitution, plain or with partial pivoting
//! - **Gauss-Jordan elimination**: full reduction to the identity, plain or with partial pivoting
//! - **LU decomposition**: `P·A = L·U` with the factors, permutation, determinant and inverse exposed
//! - **Cramer's rule**: ratio of determinants, for small systems and cross-checking
//! - **Typed failures**: singular systems are reported as [`SolverError`], never as `NaN`
//! - **Generic Scalar Types**: Works with f64, f32
//!
//! Every solver works on its own copy of the input; the caller's matrix is
//! never modified.
//!
//! # Example
//!
//! ```
//! use math_audio_elimination::{AugmentedSystem, Method, solve};
//! use ndarray::array;
//!
//! // 2x + y = 5, x + 3y = 10
//! let system = AugmentedSystem::new(array![[2.0_f64, 1.0, 5.0], [1.0, 3.0, 10.0]]).unwrap();
//!
//! let x = solve(&system, Method::GaussPartialPivot).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! ```

pub mod determinant;
pub mod direct;
pub mod error;
pub mod permutation;
pub mod pivot;
pub mod solver;
pub mod substitution;
pub mod system;
pub mod traits;

// Re-export main types
pub use error::{Result, SolverError};
pub use permutation::Permutation;
pub use pivot::PivotStrategy;
pub use system::AugmentedSystem;
pub use traits::RealField;

// Re-export direct solvers
pub use direct::{
    EliminationConfig, LuFactorization, LuSolution, cramer_solve, forward_eliminate,
    gauss_jordan_reduce, gauss_jordan_solve, gauss_solve, lu_decompose, lu_factorize, lu_solve,
};

// Re-export building blocks
pub use determinant::{determinant, determinant_with};
pub use substitution::{back_substitution, forward_substitution_unit};

// Re-export the facade
pub use solver::{Method, SolverConfig, solve, solve_all, solve_with_config};

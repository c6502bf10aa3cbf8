//! Core traits for the elimination solvers
//!
//! This module defines the scalar abstraction used throughout the crate:
//! - [`RealField`]: Trait for the real floating-point types a system can hold

use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used as matrix entries.
///
/// Every solver works over real numbers; the trait gathers the floating-point
/// operations, in-place arithmetic and ndarray product support the elimination
/// kernels rely on.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most applications)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + LinalgScalar
    + ScalarOperand
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Check if the magnitude is within `tol` of zero.
    ///
    /// With `tol == 0` this is an exact zero test.
    #[inline]
    fn is_zero_approx(&self, tol: Self) -> bool {
        self.abs() <= tol
    }

    /// Magnitude used to rank pivot candidates
    #[inline]
    fn magnitude(&self) -> Self {
        self.abs()
    }
}

impl RealField for f64 {}

impl RealField for f32 {}

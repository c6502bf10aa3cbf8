//! Pivot selection
//!
//! At every elimination step the pivot selector decides which remaining row is
//! moved onto the diagonal:
//! - [`PivotStrategy::None`]: keep the current row (plain variants)
//! - [`PivotStrategy::Partial`]: take the row with the largest magnitude in
//!   the pivot column (first occurrence wins on ties)

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::Array2;

/// Row-exchange policy used during elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PivotStrategy {
    /// Never exchange rows; the diagonal entry is the pivot
    None,
    /// Exchange with the row holding the largest-magnitude candidate
    #[default]
    Partial,
}

impl PivotStrategy {
    /// Row index to swap into `from_row` when eliminating `column`
    ///
    /// Only rows `from_row..nrows` are considered.
    pub fn select<T: RealField>(
        &self,
        matrix: &Array2<T>,
        column: usize,
        from_row: usize,
    ) -> usize {
        match self {
            PivotStrategy::None => from_row,
            PivotStrategy::Partial => {
                let mut max_val = matrix[[from_row, column]].magnitude();
                let mut max_row = from_row;

                for i in (from_row + 1)..matrix.nrows() {
                    let val = matrix[[i, column]].magnitude();
                    if val > max_val {
                        max_val = val;
                        max_row = i;
                    }
                }
                max_row
            }
        }
    }

    /// Whether this strategy ever exchanges rows
    pub fn is_pivoting(&self) -> bool {
        matches!(self, PivotStrategy::Partial)
    }
}

/// Swap two entire rows in place
pub fn swap_rows<T>(matrix: &mut Array2<T>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..matrix.ncols() {
        matrix.swap([a, j], [b, j]);
    }
}

/// Select the pivot for `step`, check it and move it onto the diagonal
///
/// The pivot column is `step` and the search starts at row `step`. Returns the
/// row the pivot came from, so callers can mirror the exchange in auxiliary
/// state (L factor, permutation, determinant sign). A pivot whose magnitude is
/// within `tolerance` of zero is [`SolverError::SingularMatrix`].
pub fn pivot_in_place<T: RealField>(
    matrix: &mut Array2<T>,
    strategy: PivotStrategy,
    step: usize,
    tolerance: T,
) -> Result<usize> {
    let pivot_row = strategy.select(matrix, step, step);
    let pivot = matrix[[pivot_row, step]];

    if pivot.is_zero_approx(tolerance) {
        log::debug!("zero pivot at step {step} ({strategy:?} pivoting)");
        return Err(SolverError::SingularMatrix { step });
    }

    if pivot_row != step {
        log::debug!("pivot step {step}: exchanging rows {step} and {pivot_row}");
        swap_rows(matrix, step, pivot_row);
    }
    log::trace!("pivot step {step}: pivot = {pivot}");

    Ok(pivot_row)
}

//! Row permutations accumulated by pivoting

use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1};

/// Row permutation recorded during a factorization
///
/// Entry `i` is the original row index now sitting at position `i`, so the
/// permuted RHS is `Pb[i] = b[P[i]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
    swaps: usize,
}

impl Permutation {
    /// Identity permutation `[0, 1, ..., n-1]`
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            swaps: 0,
        }
    }

    /// Exchange positions `i` and `j`
    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.indices.swap(i, j);
            self.swaps += 1;
        }
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the permutation is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Row indices in permuted order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of effective row exchanges applied so far
    pub fn swap_count(&self) -> usize {
        self.swaps
    }

    /// `1` for an even permutation, `-1` for an odd one
    pub fn sign<T: RealField>(&self) -> T {
        if self.swaps % 2 == 0 {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Permute a vector: `out[i] = b[P[i]]`
    ///
    /// # Panics
    ///
    /// Panics if `b` is shorter than the permutation.
    pub fn apply<T: Copy>(&self, b: ArrayView1<'_, T>) -> Array1<T> {
        self.indices.iter().map(|&p| b[p]).collect()
    }

    /// Dense permutation matrix `P`, such that `(P·A)[i] = A[P[i]]`
    pub fn to_matrix<T: RealField>(&self) -> Array2<T> {
        let n = self.len();
        let mut p = Array2::zeros((n, n));
        for (i, &src) in self.indices.iter().enumerate() {
            p[[i, src]] = T::one();
        }
        p
    }
}

use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

use crate::shape::Shape;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point matrix elements.
///
/// Required by rotations, reflectors, norms and bidiagonalization.
/// Complex elements are not supported.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Every backend (and every [`View`](crate::View) onto a backend) implements
/// this, so the algorithms in [`linalg`](crate::linalg) run unchanged against
/// any of them. Storage is assumed column-major for the linear-index and
/// column-slice accessors.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Contiguous slice of column `col` from `row_start` to the last row.
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T];

    #[inline]
    fn shape(&self) -> Shape {
        Shape::new(self.nrows(), self.ncols())
    }

    /// Element at column-major linear index `idx`.
    ///
    /// For a vector-shaped matrix (1×k or k×1) this is simply the `idx`-th entry.
    #[inline]
    fn get_linear(&self, idx: usize) -> &T {
        let rows = self.nrows();
        self.get(idx % rows, idx / rows)
    }

    /// Number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.nrows() * self.ncols()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (rotations, reflector folds, bidiagonalization)
/// to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T];

    #[inline]
    fn get_linear_mut(&mut self, idx: usize) -> &mut T {
        let rows = self.nrows();
        self.get_mut(idx % rows, idx / rows)
    }
}

// ── Borrowed parents ────────────────────────────────────────────────

impl<T, M: MatrixRef<T> + ?Sized> MatrixRef<T> for &M {
    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        (**self).get(row, col)
    }

    #[inline]
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T] {
        (**self).col_as_slice(col, row_start)
    }
}

impl<T, M: MatrixRef<T> + ?Sized> MatrixRef<T> for &mut M {
    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        (**self).get(row, col)
    }

    #[inline]
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T] {
        (**self).col_as_slice(col, row_start)
    }
}

impl<T, M: MatrixMut<T> + ?Sized> MatrixMut<T> for &mut M {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        (**self).get_mut(row, col)
    }

    #[inline]
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T] {
        (**self).col_as_mut_slice(col, row_start)
    }
}

/// `true` if every element of `m` is finite (no NaN, no ±∞).
pub fn all_finite<T: FloatScalar>(m: &impl MatrixRef<T>) -> bool {
    for j in 0..m.ncols() {
        if !m.col_as_slice(j, 0).iter().all(|x| x.is_finite()) {
            return false;
        }
    }
    true
}

use alloc::vec;
use core::ops::Mul;

use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    /// Panics when the inner dimensions differ.
    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let (m, inner, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = vec![T::zero(); m * p];
        // output column j accumulates the columns of self weighted by rhs[(.., j)]
        for (out, rhs_col) in data.chunks_exact_mut(m.max(1)).zip(rhs.data.chunks_exact(inner.max(1))) {
            for (lhs_col, &w) in self.data.chunks_exact(m.max(1)).zip(rhs_col) {
                for (o, &x) in out.iter_mut().zip(lhs_col) {
                    *o = *o + x * w;
                }
            }
        }
        DynMatrix { data, nrows: m, ncols: p }
    }
}

impl<T: Scalar> DynMatrix<T> {
    /// `(M×N) → (N×M)`.
    ///
    /// ```
    /// use linview::DynMatrix;
    /// let t = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).transpose();
    /// assert_eq!((t.nrows(), t.ncols()), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        DynMatrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Entries `(i, i)` for `i < min(rows, cols)`.
    pub fn diag(&self) -> DynVector<T> {
        let k = self.nrows.min(self.ncols);
        DynVector::from_vec((0..k).map(|i| self[(i, i)]).collect())
    }

    /// Entries `(i − 1, i)` for `1 ≤ i < min(rows, cols)`.
    ///
    /// ```
    /// use linview::DynMatrix;
    /// let m = DynMatrix::from_rows(3, 3, &[1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 0.0, 0.0, 5.0]);
    /// assert_eq!(m.diag().as_slice(), &[1.0, 3.0, 5.0]);
    /// assert_eq!(m.superdiag().as_slice(), &[2.0, 4.0]);
    /// ```
    pub fn superdiag(&self) -> DynVector<T> {
        let k = self.nrows.min(self.ncols);
        DynVector::from_vec((1..k).map(|i| self[(i - 1, i)]).collect())
    }
}

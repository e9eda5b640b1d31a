use crate::traits::FloatScalar;

use super::vector::DynVector;
use super::DynMatrix;

impl<T: FloatScalar> DynVector<T> {
    /// Euclidean length.
    ///
    /// ```
    /// use linview::DynVector;
    /// assert!((DynVector::from_slice(&[3.0_f64, 4.0]).norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// Square root of the sum of squared entries.
    pub fn frobenius_norm(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
    }
}

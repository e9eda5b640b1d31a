use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use crate::traits::Scalar;

/// Owned one-dimensional buffer indexed by `v[i]`.
///
/// Reflector directions and extracted diagonals come back as `DynVector`.
///
/// ```
/// use linview::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[2], 3.0);
/// assert_eq!(v.dot(&v), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    data: Vec<T>,
}

impl<T: Scalar> DynVector<T> {
    pub fn from_slice(data: &[T]) -> Self {
        Self { data: data.to_vec() }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// The `_zero` parameter only fixes `T`.
    pub fn zeros(n: usize, _zero: T) -> Self {
        Self { data: vec![T::zero(); n] }
    }

    /// Panics on length mismatch.
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.data
            .iter()
            .zip(&rhs.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

impl<T> DynVector<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_agree() {
        let a = DynVector::from_slice(&[0.0, 0.0]);
        assert_eq!(a, DynVector::from_vec(vec![0.0, 0.0]));
        assert_eq!(a, DynVector::zeros(2, 0.0));
        assert!(DynVector::zeros(0, 0.0_f64).is_empty());
    }

    #[test]
    fn dot() {
        let a = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        let b = DynVector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn dot_length_mismatch() {
        let _ = DynVector::from_slice(&[1.0]).dot(&DynVector::zeros(2, 0.0));
    }
}

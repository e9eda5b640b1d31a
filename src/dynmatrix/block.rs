use crate::linalg::LinalgError;
use crate::shape::{Offset, Shape};
use crate::traits::Scalar;
use crate::view::View;

use super::DynMatrix;

impl<T> DynMatrix<T> {
    /// Read-only window of shape `size` at `offset`.
    ///
    /// ```
    /// use linview::{DynMatrix, Offset, Shape};
    /// let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let w = m.view(Offset::new(1, 1), Shape::new(2, 2)).unwrap();
    /// assert_eq!(*w.at(1, 1), 8.0);
    /// ```
    pub fn view(&self, offset: Offset, size: Shape) -> Result<View<T, &Self>, LinalgError> {
        View::new(self, offset, size)
    }

    pub fn view_mut(
        &mut self,
        offset: Offset,
        size: Shape,
    ) -> Result<View<T, &mut Self>, LinalgError> {
        View::new(self, offset, size)
    }
}

impl<T: Scalar> DynMatrix<T> {
    /// Owned copy of the `rows × cols` window at `(i, j)`.
    pub fn block(&self, i: usize, j: usize, rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Ok(self.view(Offset::new(i, j), Shape::new(rows, cols))?.to_dyn())
    }
}

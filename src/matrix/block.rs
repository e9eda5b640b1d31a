use crate::linalg::LinalgError;
use crate::shape::{Offset, Shape};
use crate::view::View;
use crate::Matrix;

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Read-only window of shape `size` at `offset`.
    ///
    /// ```
    /// use linview::{Matrix, Offset, Shape};
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// let w = m.view(Offset::new(1, 1), Shape::new(2, 2)).unwrap();
    /// assert_eq!(*w.at(1, 0), 8.0);
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

pub mod aliases;
mod block;
mod norm;
mod ops;

use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Stack-allocated M×N matrix.
///
/// Column `j` lives in `data[j]`, so every column is a contiguous `[T; M]`
/// and windows hand out column slices without copying.
///
/// ```
/// use linview::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!(a[(1, 0)], 4.0);
/// assert_eq!((a.nrows(), a.ncols()), (2, 3));
/// assert_eq!(a.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) data: [[T; M]; N],
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Build from `f(row, col)`.
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|j| core::array::from_fn(|i| f(i, j))),
        }
    }

    /// Build from rows written out as nested arrays.
    #[inline]
    pub fn new(rows: [[T; N]; M]) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|i, j| rows[i][j])
    }

    #[inline]
    pub const fn nrows(&self) -> usize {
        M
    }

    #[inline]
    pub const fn ncols(&self) -> usize {
        N
    }

    /// All entries, column by column.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    pub fn zeros() -> Self {
        Self::from_fn(|_, _| T::zero())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn eye() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T, const M: usize, const N: usize> MatrixRef<T> for Matrix<T, M, N> {
    #[inline]
    fn nrows(&self) -> usize {
        M
    }

    #[inline]
    fn ncols(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[col][row]
    }

    #[inline]
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T] {
        &self.data[col][row_start..]
    }
}

impl<T, const M: usize, const N: usize> MatrixMut<T> for Matrix<T, M, N> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[col][row]
    }

    #[inline]
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T] {
        &mut self.data[col][row_start..]
    }
}

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col][row]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col][row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_stored_by_column() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(m.data, [[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]);
        assert_eq!(m[(2, 1)], 6.0);
    }

    #[test]
    fn eye_and_zeros() {
        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(Matrix::<f64, 2, 4>::zeros().as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn column_slices_start_at_row() {
        let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(m.col_as_slice(1, 0), &[2.0, 4.0, 6.0]);
        assert_eq!(m.col_as_slice(0, 2), &[5.0]);
        m.col_as_mut_slice(0, 1)[0] = -3.0;
        assert_eq!(m[(1, 0)], -3.0);
    }

    #[test]
    fn empty_dimensions() {
        let m: Matrix<f64, 0, 0> = Matrix::new([]);
        assert!(m.as_slice().is_empty());
        assert_eq!(MatrixRef::shape(&m), crate::Shape::new(0, 0));
    }
}

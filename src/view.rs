use core::marker::PhantomData;

use crate::linalg::givens::{apply_rotation_in_place, check_rotation, GivensRotation, Side};
use crate::linalg::LinalgError;
use crate::shape::{Offset, Shape};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
use crate::DynMatrix;

/// A bounds-checked window onto a rectangular region of a parent matrix.
///
/// Element `(i, j)` of the view is element `(offset.row + i, offset.col + j)`
/// of the parent. The parent is held as `M`, which is usually `&P` (read-only
/// window) or `&mut P` (read/write window) but may also be an owned `P`.
///
/// Views implement [`MatrixRef`] and [`MatrixMut`] themselves, so they nest
/// and every generic algorithm in this crate accepts them.
///
/// # Examples
///
/// ```
/// use linview::{DynMatrix, Offset, Shape};
///
/// let mut a = DynMatrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
/// {
///     let mut w = a.view_mut(Offset::new(1, 1), Shape::new(2, 2)).unwrap();
///     assert_eq!(*w.at(0, 0), 5.0);
///     *w.at_mut(1, 1) = 0.0;
/// }
/// assert_eq!(a[(2, 2)], 0.0);
///
/// // A window that does not fit is rejected up front.
/// assert!(a.view(Offset::new(2, 2), Shape::new(2, 1)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct View<T, M> {
    parent: M,
    offset: Offset,
    size: Shape,
    _elem: PhantomData<T>,
}

impl<T, M: MatrixRef<T>> View<T, M> {
    /// Create a window of shape `size` at `offset` in `parent`.
    ///
    /// Fails with [`LinalgError::Shape`] unless
    /// `offset.row + size.rows <= parent.nrows()` and
    /// `offset.col + size.cols <= parent.ncols()`.
    pub fn new(parent: M, offset: Offset, size: Shape) -> Result<Self, LinalgError> {
        let parent_shape = parent.shape();
        let fits = |start: usize, len: usize, extent: usize| {
            start.checked_add(len).is_some_and(|end| end <= extent)
        };
        if !fits(offset.row, size.rows, parent_shape.rows)
            || !fits(offset.col, size.cols, parent_shape.cols)
        {
            return Err(LinalgError::Shape {
                offset,
                size,
                parent: parent_shape,
            });
        }
        Ok(Self {
            parent,
            offset,
            size,
            _elem: PhantomData,
        })
    }

    /// Element `(i, j)` in view coordinates.
    ///
    /// Only the window itself was bounds-checked; callers keep
    /// `i < size().rows` and `j < size().cols`.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> &T {
        self.parent.get(self.offset.row + i, self.offset.col + j)
    }

    /// The view's own shape (not the parent's).
    #[inline]
    pub fn size(&self) -> Shape {
        self.size
    }

    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[inline]
    pub fn parent(&self) -> &M {
        &self.parent
    }

    /// Give back the parent (or the borrow of it).
    #[inline]
    pub fn into_inner(self) -> M {
        self.parent
    }

    /// A read-only window into this view, `offset` relative to the view.
    pub fn sub_view(&self, offset: Offset, size: Shape) -> Result<View<T, &Self>, LinalgError> {
        View::new(self, offset, size)
    }
}

impl<T: Scalar, M: MatrixRef<T>> View<T, M> {
    /// Copy the window into a new owned matrix.
    ///
    /// ```
    /// use linview::{DynMatrix, Offset, Shape};
    /// let a = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = a.view(Offset::new(1, 0), Shape::new(2, 2)).unwrap().to_dyn();
    /// assert_eq!(b[(0, 0)], 3.0);
    /// assert_eq!(b[(1, 1)], 7.0);
    /// ```
    pub fn to_dyn(&self) -> DynMatrix<T> {
        DynMatrix::from_fn(self.size.rows, self.size.cols, |i, j| *self.at(i, j))
    }
}

impl<T, M: MatrixMut<T>> View<T, M> {
    /// Mutable element `(i, j)` in view coordinates; writes reach the parent.
    #[inline]
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        self.parent.get_mut(self.offset.row + i, self.offset.col + j)
    }

    /// A read/write window into this view, `offset` relative to the view.
    pub fn sub_view_mut(
        &mut self,
        offset: Offset,
        size: Shape,
    ) -> Result<View<T, &mut Self>, LinalgError> {
        View::new(self, offset, size)
    }
}

impl<T: Copy, M: MatrixMut<T>> View<T, M> {
    /// Overwrite the window with `other`, element by element.
    ///
    /// Fails with [`LinalgError::IncompatibleShape`] unless `other` has the
    /// view's shape. Assigning a matrix into a mutable view of itself cannot
    /// be written: the view holds the parent's unique borrow.
    ///
    /// ```
    /// use linview::{DynMatrix, Offset, Shape};
    /// let mut a = DynMatrix::zeros(3, 3, 0.0_f64);
    /// let patch = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// a.view_mut(Offset::new(1, 1), Shape::new(2, 2)).unwrap().assign(&patch).unwrap();
    /// assert_eq!(a[(1, 1)], 1.0);
    /// assert_eq!(a[(2, 2)], 4.0);
    /// ```
    pub fn assign(&mut self, other: &impl MatrixRef<T>) -> Result<(), LinalgError> {
        if other.shape() != self.size {
            return Err(LinalgError::IncompatibleShape {
                expected: self.size,
                got: other.shape(),
            });
        }
        for j in 0..self.size.cols {
            for i in 0..self.size.rows {
                *self.at_mut(i, j) = *other.get(i, j);
            }
        }
        Ok(())
    }
}

impl<T: FloatScalar, M: MatrixMut<T>> View<T, M> {
    /// Apply `rotation` to this view in place.
    ///
    /// See [`apply_rotation_in_place`].
    pub fn rotate(&mut self, rotation: &GivensRotation<T>, side: Side) -> Result<(), LinalgError> {
        apply_rotation_in_place(self, rotation, side)
    }

    /// Copy `other` into this view, then apply `rotation` to the result.
    ///
    /// The rotation indices are validated against this view before anything
    /// is written, so a failing call leaves the view untouched.
    ///
    /// ```
    /// use linview::{DynMatrix, Offset, Shape};
    /// use linview::linalg::{GivensRotation, Side};
    ///
    /// let src = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let mut dst = DynMatrix::zeros(3, 3, 0.0_f64);
    /// let rot = GivensRotation::new(0, 1, 1.0, 0.0);
    /// dst.view_mut(Offset::new(1, 1), Shape::new(2, 2))
    ///     .unwrap()
    ///     .assign_rotated(&src, &rot, Side::Left)
    ///     .unwrap();
    /// assert_eq!(dst[(2, 1)], 3.0);
    /// ```
    pub fn assign_rotated(
        &mut self,
        other: &impl MatrixRef<T>,
        rotation: &GivensRotation<T>,
        side: Side,
    ) -> Result<(), LinalgError> {
        check_rotation(rotation, self.size, side)?;
        self.assign(other)?;
        apply_rotation_in_place(self, rotation, side)
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T, M: MatrixRef<T>> MatrixRef<T> for View<T, M> {
    #[inline]
    fn nrows(&self) -> usize {
        self.size.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.size.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        self.at(row, col)
    }

    #[inline]
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T] {
        let len = self.size.rows - row_start;
        let full = self
            .parent
            .col_as_slice(self.offset.col + col, self.offset.row + row_start);
        &full[..len]
    }
}

impl<T, M: MatrixMut<T>> MatrixMut<T> for View<T, M> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.at_mut(row, col)
    }

    #[inline]
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T] {
        let len = self.size.rows - row_start;
        let full = self
            .parent
            .col_as_mut_slice(self.offset.col + col, self.offset.row + row_start);
        &mut full[..len]
    }
}

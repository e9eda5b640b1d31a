use crate::linalg::LinalgError;
use crate::shape::Shape;
use crate::traits::{FloatScalar, MatrixMut};
use num_traits::Float;

/// Which side of the target a rotation multiplies from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `Rᵀ · A`: mixes rows `i` and `k`.
    Left,
    /// `A · R`: mixes columns `i` and `k`.
    Right,
}

/// A Givens rotation `R = [[c, s], [-s, c]]` acting on indices `i` and `k`.
///
/// Immutable once built. `c² + s² = 1` is the caller's responsibility and is
/// not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivensRotation<T> {
    i: usize,
    k: usize,
    c: T,
    s: T,
}

impl<T: FloatScalar> GivensRotation<T> {
    #[inline]
    pub fn new(i: usize, k: usize, c: T, s: T) -> Self {
        Self { i, k, c, s }
    }

    /// The rotation that, applied from the left to rows `(i, k)`, maps a
    /// column holding `a` at row `i` and `b` at row `k` to `(r, 0)`.
    ///
    /// ```
    /// use linview::DynMatrix;
    /// use linview::linalg::{apply_rotation_in_place, GivensRotation, Side};
    ///
    /// let mut x = DynMatrix::from_rows(2, 1, &[3.0_f64, 4.0]);
    /// let rot = GivensRotation::zeroing(0, 1, 3.0, 4.0);
    /// apply_rotation_in_place(&mut x, &rot, Side::Left).unwrap();
    /// assert!((x[(0, 0)].abs() - 5.0).abs() < 1e-12);
    /// assert!(x[(1, 0)].abs() < 1e-12);
    /// ```
    pub fn zeroing(i: usize, k: usize, a: T, b: T) -> Self {
        let (c, s) = givens(a, b);
        Self { i, k, c, s }
    }

    #[inline]
    pub fn i(&self) -> usize {
        self.i
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn c(&self) -> T {
        self.c
    }

    #[inline]
    pub fn s(&self) -> T {
        self.s
    }
}

/// Compute `(c, s)` with `[[c, s], [-s, c]]ᵀ · [a, b]ᵀ = [r, 0]ᵀ`.
///
/// Avoids overflow by dividing through by the larger of `|a|`, `|b|`.
pub fn givens<R: Float>(a: R, b: R) -> (R, R) {
    if b == R::zero() {
        (R::one(), R::zero())
    } else if b.abs() > a.abs() {
        let tau = -a / b;
        let s = R::one() / (R::one() + tau * tau).sqrt();
        (s * tau, s)
    } else {
        let tau = -b / a;
        let c = R::one() / (R::one() + tau * tau).sqrt();
        (c, c * tau)
    }
}

/// Reject a rotation whose indices do not fit a view of shape `size`.
pub(crate) fn check_rotation<T: FloatScalar>(
    rotation: &GivensRotation<T>,
    size: Shape,
    side: Side,
) -> Result<(), LinalgError> {
    let extent = match side {
        Side::Left => size.rows,
        Side::Right => size.cols,
    };
    for index in [rotation.i, rotation.k] {
        if index >= extent {
            return Err(LinalgError::IndexOutOfRange { index, extent });
        }
    }
    Ok(())
}

/// Apply a Givens rotation to `m` in place.
///
/// - [`Side::Left`]: for every column `j`,
///   `m[i,j] = c·m[i,j] − s·m[k,j]` and `m[k,j] = s·m[i,j] + c·m[k,j]`,
///   both computed from the values before the update.
/// - [`Side::Right`]: the same on columns `i`, `k` for every row `j`.
///
/// Returns [`LinalgError::IndexOutOfRange`] (with `m` untouched) if `i` or `k`
/// is not below the row count (`Left`) or column count (`Right`).
///
/// ```
/// use linview::DynMatrix;
/// use linview::linalg::{apply_rotation_in_place, GivensRotation, Side};
///
/// let mut a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// let rot = GivensRotation::new(0, 1, 0.0, -1.0);
/// apply_rotation_in_place(&mut a, &rot, Side::Left).unwrap();
/// assert_eq!(a, DynMatrix::from_rows(2, 2, &[3.0, 4.0, -1.0, -2.0]));
/// ```
pub fn apply_rotation_in_place<T: FloatScalar>(
    m: &mut impl MatrixMut<T>,
    rotation: &GivensRotation<T>,
    side: Side,
) -> Result<(), LinalgError> {
    check_rotation(rotation, m.shape(), side)?;
    let (i, k, c, s) = (rotation.i, rotation.k, rotation.c, rotation.s);

    match side {
        Side::Left => {
            for j in 0..m.ncols() {
                let tau1 = *m.get(i, j);
                let tau2 = *m.get(k, j);
                *m.get_mut(i, j) = c * tau1 - s * tau2;
                *m.get_mut(k, j) = s * tau1 + c * tau2;
            }
        }
        Side::Right => {
            for j in 0..m.nrows() {
                let tau1 = *m.get(j, i);
                let tau2 = *m.get(j, k);
                *m.get_mut(j, i) = c * tau1 - s * tau2;
                *m.get_mut(j, k) = s * tau1 + c * tau2;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Offset;
    use crate::{DynMatrix, Matrix, View};

    const TOL: f64 = 1e-12;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    #[test]
    fn quarter_turn_left() {
        let mut a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let rot = GivensRotation::new(0, 1, 0.0, 1.0);
        apply_rotation_in_place(&mut a, &rot, Side::Left).unwrap();
        // row 0 <- -old row 1, row 1 <- old row 0
        assert_eq!(a, DynMatrix::from_rows(2, 2, &[-3.0, -4.0, 1.0, 2.0]));
    }

    #[test]
    fn quarter_turn_left_negative_sine() {
        let mut a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let rot = GivensRotation::new(0, 1, 0.0, -1.0);
        apply_rotation_in_place(&mut a, &rot, Side::Left).unwrap();
        assert_eq!(a, DynMatrix::from_rows(2, 2, &[3.0, 4.0, -1.0, -2.0]));
    }

    #[test]
    fn quarter_turn_right() {
        let mut a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let rot = GivensRotation::new(0, 1, 0.0, 1.0);
        apply_rotation_in_place(&mut a, &rot, Side::Right).unwrap();
        assert_eq!(a, DynMatrix::from_rows(2, 2, &[-2.0, 1.0, -4.0, 3.0]));
    }

    #[test]
    fn identity_rotation_is_noop() {
        let rot = GivensRotation::new(0, 1, 1.0_f64, 0.0);
        for (rows, cols) in [(2, 2), (2, 5), (5, 2), (4, 4), (7, 3)] {
            let orig = DynMatrix::from_fn(rows, cols, |i, j| (i * 7 + j * 3) as f64 - 4.5);
            for side in [Side::Left, Side::Right] {
                let mut a = orig.clone();
                apply_rotation_in_place(&mut a, &rot, side).unwrap();
                assert_eq!(a, orig, "{}x{} {:?}", rows, cols, side);
            }
        }
    }

    #[test]
    fn untouched_rows_and_columns() {
        let orig = DynMatrix::from_fn(4, 3, |i, j| (i * 3 + j) as f64);
        let rot = GivensRotation::new(1, 3, 0.6, 0.8);
        let mut a = orig.clone();
        apply_rotation_in_place(&mut a, &rot, Side::Left).unwrap();
        for j in 0..3 {
            assert_eq!(a[(0, j)], orig[(0, j)]);
            assert_eq!(a[(2, j)], orig[(2, j)]);
            assert_near(a[(1, j)], 0.6 * orig[(1, j)] - 0.8 * orig[(3, j)], TOL, "row 1");
            assert_near(a[(3, j)], 0.8 * orig[(1, j)] + 0.6 * orig[(3, j)], TOL, "row 3");
        }
    }

    #[test]
    fn left_index_out_of_range() {
        let mut a = DynMatrix::zeros(2, 5, 0.0_f64);
        let rot = GivensRotation::new(0, 3, 0.6, 0.8);
        assert_eq!(
            apply_rotation_in_place(&mut a, &rot, Side::Left),
            Err(LinalgError::IndexOutOfRange { index: 3, extent: 2 })
        );
        // the same rotation fits the columns
        assert!(apply_rotation_in_place(&mut a, &rot, Side::Right).is_ok());
    }

    #[test]
    fn right_index_out_of_range() {
        let mut a = DynMatrix::zeros(4, 2, 0.0_f64);
        let rot = GivensRotation::new(2, 1, 0.6, 0.8);
        assert_eq!(
            apply_rotation_in_place(&mut a, &rot, Side::Right),
            Err(LinalgError::IndexOutOfRange { index: 2, extent: 2 })
        );
    }

    #[test]
    fn rotation_on_window_uses_window_extent() {
        let mut a = DynMatrix::from_fn(5, 5, |i, j| (i * 5 + j) as f64);
        let rot = GivensRotation::new(0, 2, 0.0, 1.0);
        {
            let mut w = View::new(&mut a, Offset::new(2, 1), Shape::new(2, 2)).unwrap();
            assert!(apply_rotation_in_place(&mut w, &rot, Side::Left).is_err());
            assert!(apply_rotation_in_place(&mut w, &GivensRotation::new(0, 1, 0.0, 1.0), Side::Left).is_ok());
        }
        // rows 2 and 3 mixed, only in columns 1..3
        assert_eq!(a[(2, 0)], 10.0);
        assert_eq!(a[(2, 1)], -16.0);
        assert_eq!(a[(3, 2)], 12.0);
        assert_eq!(a[(2, 3)], 13.0);
    }

    #[test]
    fn givens_zeroes_second_component() {
        for (a, b) in [(3.0_f64, 4.0), (-2.0, 1.0), (1e-3, -7.0), (5.0, 0.0), (0.0, 2.0)] {
            let (c, s) = givens(a, b);
            assert_near(c * c + s * s, 1.0, TOL, "unit");
            let r0 = c * a - s * b;
            let r1 = s * a + c * b;
            assert_near(r1, 0.0, TOL, "zeroed");
            assert_near(r0.abs(), (a * a + b * b).sqrt(), TOL, "norm kept");
        }
    }

    #[test]
    fn zeroing_rotation_on_fixed_matrix() {
        let mut m = Matrix::new([[1.0_f64, 2.0], [0.0, 1.0], [2.0, 5.0]]);
        let rot = GivensRotation::zeroing(0, 2, m[(0, 0)], m[(2, 0)]);
        apply_rotation_in_place(&mut m, &rot, Side::Left).unwrap();
        assert_near(m[(2, 0)], 0.0, TOL, "m[2,0]");
        assert_near(m[(0, 0)].abs(), 5.0_f64.sqrt(), TOL, "m[0,0]");
        assert_eq!(m[(1, 1)], 1.0);
    }

    #[test]
    fn rotation_preserves_frobenius_norm() {
        let mut a = DynMatrix::from_fn(3, 4, |i, j| (i as f64 - 1.0) * (j as f64 + 0.5));
        let before = a.frobenius_norm();
        let rot = GivensRotation::zeroing(0, 1, 2.0, -1.5);
        apply_rotation_in_place(&mut a, &rot, Side::Right).unwrap();
        assert_near(a.frobenius_norm(), before, 1e-12, "norm");
    }

    #[test]
    fn accessors() {
        let rot = GivensRotation::new(1, 4, 0.6_f32, 0.8);
        assert_eq!((rot.i(), rot.k()), (1, 4));
        assert_eq!(rot.c(), 0.6);
        assert_eq!(rot.s(), 0.8);
    }
}

use crate::linalg::householder::{apply_left, apply_right, Householder, ReflectorBuilder};
use crate::linalg::LinalgError;
use crate::matrix::Matrix;
use crate::shape::{Offset, Shape};
use crate::traits::{all_finite, FloatScalar, MatrixMut};
use crate::view::View;

/// Which factors a decomposition returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecomposeMode {
    /// Full square `U` (m×m) and `V` (n×n).
    #[default]
    Complete,
    /// Thin factors. Not implemented.
    Economy,
    /// No factors accumulated. Not implemented.
    Zero,
}

/// Options for [`bidiagonalize_in_place`].
///
/// ```
/// use linview::linalg::{BidiagControl, DecomposeMode};
/// let ctrl = BidiagControl::default();
/// assert_eq!(ctrl.mode(), DecomposeMode::Complete);
/// let thin = ctrl.with_mode(DecomposeMode::Economy);
/// assert_eq!(thin.mode(), DecomposeMode::Economy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BidiagControl {
    mode: DecomposeMode,
}

impl BidiagControl {
    #[inline]
    pub const fn new(mode: DecomposeMode) -> Self {
        Self { mode }
    }

    #[inline]
    pub const fn with_mode(self, mode: DecomposeMode) -> Self {
        Self { mode }
    }

    #[inline]
    pub const fn mode(&self) -> DecomposeMode {
        self.mode
    }
}

fn set_identity<T: FloatScalar>(m: &mut impl MatrixMut<T>) {
    for j in 0..m.ncols() {
        for i in 0..m.nrows() {
            *m.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }
}

fn transpose_square_in_place<T: FloatScalar>(m: &mut impl MatrixMut<T>) {
    let n = m.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            let upper = *m.get(i, j);
            *m.get_mut(i, j) = *m.get(j, i);
            *m.get_mut(j, i) = upper;
        }
    }
}

fn check_finite_after_step<T: FloatScalar>(
    a: &impl MatrixMut<T>,
    u: &impl MatrixMut<T>,
    v: &impl MatrixMut<T>,
    step: usize,
) -> Result<(), LinalgError> {
    let finite = all_finite(a) && all_finite(u) && all_finite(v);
    if !finite {
        log::error!(
            target: "linview",
            "non-finite values after bidiagonalization step {}",
            step
        );
        debug_assert!(finite, "non-finite values after bidiagonalization step {}", step);
        return Err(LinalgError::InternalInvariant { step });
    }
    Ok(())
}

/// Householder bidiagonalization (Golub & Van Loan, Algorithm 5.4.2).
///
/// On entry `a` holds an m×n matrix with `m >= n`; `u` must be m×m and `v`
/// n×n (their contents are overwritten). On success `a` holds the upper
/// bidiagonal `B` and
///
/// ```text
/// uᵀ · A · v = B        (equivalently A = u · B · vᵀ)
/// ```
///
/// with `u` and `v` orthogonal. Step `j` builds a left reflector from
/// `A[j.., j]` and, while `j + 1 <= n - 2`, a right reflector from
/// `A[j, j+1..]`. Both are folded into windows of `a`, `u` and `v` in place.
/// A matrix with a single row or column is returned as `(I, A, I)`.
///
/// Checks run in this order, before anything is written:
///
/// 1. `ctrl.mode()` must be [`DecomposeMode::Complete`] ([`LinalgError::NotSupported`])
/// 2. `m >= n` ([`LinalgError::IncompatibleShape`])
/// 3. `u` is m×m and `v` is n×n ([`LinalgError::IncompatibleShape`])
/// 4. every entry of `a` is finite ([`LinalgError::InvalidInput`])
///
/// Non-finite values appearing mid-run (only possible with a misbehaving
/// `builder`) panic in debug builds and return
/// [`LinalgError::InternalInvariant`] otherwise.
pub fn bidiagonalize_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    u: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
    ctrl: &BidiagControl,
    builder: &impl ReflectorBuilder<T>,
) -> Result<(), LinalgError> {
    let mode = ctrl.mode();
    if mode != DecomposeMode::Complete {
        log::warn!(target: "linview", "bidiagonalization mode {:?} is not supported", mode);
        return Err(LinalgError::NotSupported { mode });
    }

    let (m, n) = (a.nrows(), a.ncols());
    if m < n {
        return Err(LinalgError::IncompatibleShape {
            expected: Shape::new(n, n),
            got: a.shape(),
        });
    }
    if u.shape() != Shape::new(m, m) {
        return Err(LinalgError::IncompatibleShape {
            expected: Shape::new(m, m),
            got: u.shape(),
        });
    }
    if v.shape() != Shape::new(n, n) {
        return Err(LinalgError::IncompatibleShape {
            expected: Shape::new(n, n),
            got: v.shape(),
        });
    }
    if !all_finite(a) {
        return Err(LinalgError::InvalidInput);
    }

    set_identity(u);
    set_identity(v);

    // Square inputs leave the last column alone; tall ones need one more
    // left reflector to clear A[n.., n-1].
    let steps = if n > 1 && m > n { n } else { n.saturating_sub(1) };
    log::debug!(target: "linview", "bidiagonalizing {}x{} matrix in {} steps", m, n, steps);

    for j in 0..steps {
        let left = builder.build(&View::new(&*a, Offset::new(j, j), Shape::new(m - j, 1))?);
        apply_left(
            &mut View::new(&mut *a, Offset::new(j, j), Shape::new(m - j, n - j))?,
            &left,
        )?;
        // Rows j.. of the accumulated product; equals H·U without forming H.
        apply_left(
            &mut View::new(&mut *u, Offset::new(j, 0), Shape::new(m - j, m))?,
            &left,
        )?;
        log::trace!(target: "linview", "step {}: left beta = {:?}", j, left.scale());

        if j + 2 < n {
            let width = n - j - 1;
            let right = builder.build(&View::new(&*a, Offset::new(j, j + 1), Shape::new(1, width))?);
            apply_right(
                &mut View::new(&mut *a, Offset::new(j, j + 1), Shape::new(m - j, width))?,
                &right,
            )?;
            // Row 0 of V stays e0; rows 1..j already carry fill-in from earlier steps.
            apply_right(
                &mut View::new(&mut *v, Offset::new(1, j + 1), Shape::new(n - 1, width))?,
                &right,
            )?;
            log::trace!(target: "linview", "step {}: right beta = {:?}", j, right.scale());
        }

        check_finite_after_step(&*a, &*u, &*v, j)?;
    }

    transpose_square_in_place(u);
    log::debug!(target: "linview", "bidiagonalization of {}x{} matrix done", m, n);
    Ok(())
}

// ── Fixed-size wrapper ──────────────────────────────────────────────

/// Bidiagonalization `A = U · B · Vᵀ` of a fixed-size matrix (M ≥ N).
///
/// # Example
///
/// ```
/// use linview::Matrix;
///
/// let a = Matrix::new([
///     [12.0_f64, -51.0, 4.0],
///     [6.0, 167.0, -68.0],
///     [-4.0, 24.0, -41.0],
/// ]);
/// let bd = a.bidiag().unwrap();
/// let b = bd.b();
/// assert!(b[(2, 0)].abs() < 1e-10);
/// assert!(b[(0, 2)].abs() < 1e-10);
///
/// let back = *bd.u() * *b * bd.v().transpose();
/// for i in 0..3 {
///     for j in 0..3 {
///         assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-10);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bidiagonalization<T, const M: usize, const N: usize> {
    u: Matrix<T, M, M>,
    b: Matrix<T, M, N>,
    v: Matrix<T, N, N>,
}

impl<T: FloatScalar, const M: usize, const N: usize> Bidiagonalization<T, M, N> {
    /// Decompose `a` with the default [`Householder`] reflectors.
    pub fn new(a: &Matrix<T, M, N>, ctrl: &BidiagControl) -> Result<Self, LinalgError> {
        Self::with_builder(a, ctrl, &Householder)
    }

    /// Decompose `a` with a caller-supplied reflector source.
    pub fn with_builder(
        a: &Matrix<T, M, N>,
        ctrl: &BidiagControl,
        builder: &impl ReflectorBuilder<T>,
    ) -> Result<Self, LinalgError> {
        let mut b = *a;
        let mut u = Matrix::<T, M, M>::zeros();
        let mut v = Matrix::<T, N, N>::zeros();
        bidiagonalize_in_place(&mut b, &mut u, &mut v, ctrl, builder)?;
        Ok(Self { u, b, v })
    }

    /// Left orthogonal factor (M×M).
    #[inline]
    pub fn u(&self) -> &Matrix<T, M, M> {
        &self.u
    }

    /// The upper bidiagonal matrix (M×N).
    #[inline]
    pub fn b(&self) -> &Matrix<T, M, N> {
        &self.b
    }

    /// Right orthogonal factor (N×N).
    #[inline]
    pub fn v(&self) -> &Matrix<T, N, N> {
        &self.v
    }

    /// `B[(i, i)]`.
    pub fn diagonal(&self) -> [T; N] {
        core::array::from_fn(|i| self.b[(i, i)])
    }

    /// `B[(i, i + 1)]` for `i < N - 1`; the last entry is zero.
    pub fn superdiagonal(&self) -> [T; N] {
        core::array::from_fn(|i| if i + 1 < N { self.b[(i, i + 1)] } else { T::zero() })
    }

    #[inline]
    pub fn into_parts(self) -> (Matrix<T, M, M>, Matrix<T, M, N>, Matrix<T, N, N>) {
        (self.u, self.b, self.v)
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Bidiagonalization with the default control.
    pub fn bidiag(&self) -> Result<Bidiagonalization<T, M, N>, LinalgError> {
        Bidiagonalization::new(self, &BidiagControl::default())
    }

    /// Bidiagonalization with an explicit [`BidiagControl`].
    ///
    /// Only [`DecomposeMode::Complete`] is implemented; other modes return
    /// [`LinalgError::NotSupported`].
    pub fn bidiag_with(
        &self,
        ctrl: &BidiagControl,
    ) -> Result<Bidiagonalization<T, M, N>, LinalgError> {
        Bidiagonalization::new(self, ctrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynmatrix::{DynMatrix, DynVector};
    use crate::linalg::Reflector;
    use crate::traits::MatrixRef;
    use core::cell::Cell;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    fn assert_orthogonal<const K: usize>(q: &Matrix<f64, K, K>, tol: f64) {
        let qtq = q.transpose() * *q;
        for i in 0..K {
            for j in 0..K {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(qtq[(i, j)], expected, tol, &format!("QtQ[({},{})]", i, j));
            }
        }
    }

    fn assert_upper_bidiagonal<const M: usize, const N: usize>(b: &Matrix<f64, M, N>, tol: f64) {
        for i in 0..M {
            for j in 0..N {
                if j != i && j != i + 1 {
                    assert_near(b[(i, j)], 0.0, tol, &format!("B[({},{})]", i, j));
                }
            }
        }
    }

    fn check<const M: usize, const N: usize>(a: Matrix<f64, M, N>) {
        let bd = a.bidiag().unwrap();
        let tol = 1e-12 * a.frobenius_norm().max(1.0);
        assert_upper_bidiagonal(bd.b(), tol);
        assert_orthogonal(bd.u(), 1e-12);
        assert_orthogonal(bd.v(), 1e-12);

        let reduced = bd.u().transpose() * a * *bd.v();
        let back = *bd.u() * *bd.b() * bd.v().transpose();
        for i in 0..M {
            for j in 0..N {
                assert_near(reduced[(i, j)], bd.b()[(i, j)], tol, &format!("UtAV[({},{})]", i, j));
                assert_near(back[(i, j)], a[(i, j)], tol, &format!("UBVt[({},{})]", i, j));
            }
        }
    }

    #[test]
    fn square_3x3() {
        check(Matrix::new([
            [12.0, -51.0, 4.0],
            [6.0, 167.0, -68.0],
            [-4.0, 24.0, -41.0],
        ]));
    }

    #[test]
    fn square_4x4() {
        check(Matrix::new([
            [4.0, 1.0, -2.0, 2.0],
            [1.0, 2.0, 0.0, 1.0],
            [-2.0, 0.0, 3.0, -2.0],
            [2.0, 1.0, -2.0, -1.0],
        ]));
    }

    #[test]
    fn square_5x5() {
        check(Matrix::<f64, 5, 5>::from_fn(|i, j| {
            ((i * 5 + j * 3) % 7) as f64 - 3.0 + if i == j { 0.5 } else { 0.0 }
        }));
    }

    #[test]
    fn square_6x6() {
        check(Matrix::<f64, 6, 6>::from_fn(|i, j| 1.0 / (i + j + 1) as f64 + (i as f64 - j as f64)));
    }

    #[test]
    fn tall_7x5() {
        let a = Matrix::<f64, 7, 5>::from_fn(|i, j| ((i * 3 + j * 5) % 11) as f64 - 5.0);
        check(a);
        // first row and column of V are untouched by the right reflectors
        let v = *a.bidiag().unwrap().v();
        assert_eq!(v[(0, 0)], 1.0);
        for k in 1..5 {
            assert_eq!(v[(0, k)], 0.0);
            assert_eq!(v[(k, 0)], 0.0);
        }
    }

    #[test]
    fn tall_5x3() {
        check(Matrix::new([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 10.0],
            [-1.0, 0.5, 2.0],
            [3.0, -3.0, 1.0],
        ]));
    }

    #[test]
    fn tall_3x2() {
        check(Matrix::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]));
    }

    #[test]
    fn rank_deficient() {
        check(Matrix::new([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [3.0, 6.0, 9.0],
        ]));
    }

    #[test]
    fn huge_entries_do_not_overflow() {
        let a = Matrix::new([[1e200_f64, 2e200], [3e200, 4e200], [5e200, 1e200]]);
        let bd = a.bidiag().unwrap();
        assert_orthogonal(bd.u(), 1e-12);
        assert_orthogonal(bd.v(), 1e-12);
        let back = *bd.u() * *bd.b() * bd.v().transpose();
        for i in 0..3 {
            for j in 0..2 {
                assert_near(back[(i, j)] / 1e200, a[(i, j)] / 1e200, 1e-12, &format!("UBVt[({},{})]", i, j));
            }
        }
        assert_near(bd.b()[(1, 0)] / 1e200, 0.0, 1e-12, "B[1,0]");
        assert_near(bd.b()[(2, 0)] / 1e200, 0.0, 1e-12, "B[2,0]");
        assert_near(bd.b()[(2, 1)] / 1e200, 0.0, 1e-12, "B[2,1]");
    }

    #[test]
    fn zero_matrix() {
        let bd = Matrix::<f64, 3, 3>::zeros().bidiag().unwrap();
        assert_eq!(*bd.b(), Matrix::zeros());
        assert_eq!(*bd.u(), Matrix::eye());
        assert_eq!(*bd.v(), Matrix::eye());
    }

    #[test]
    fn single_element_is_untouched() {
        let a = Matrix::new([[-3.5_f64]]);
        let (u, b, v) = a.bidiag().unwrap().into_parts();
        assert_eq!(u, Matrix::eye());
        assert_eq!(b, a);
        assert_eq!(v, Matrix::eye());
    }

    #[test]
    fn single_column_is_untouched() {
        let a = Matrix::new([[1.0_f64], [2.0], [3.0]]);
        let (u, b, v) = a.bidiag().unwrap().into_parts();
        assert_eq!(u, Matrix::eye());
        assert_eq!(b, a);
        assert_eq!(v, Matrix::eye());
    }

    #[test]
    fn wide_matrix_rejected() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(
            a.bidiag().unwrap_err(),
            LinalgError::IncompatibleShape {
                expected: Shape::new(3, 3),
                got: Shape::new(2, 3),
            }
        );
    }

    #[test]
    fn other_modes_not_supported() {
        let a = Matrix::<f64, 2, 2>::eye();
        for mode in [DecomposeMode::Economy, DecomposeMode::Zero] {
            let ctrl = BidiagControl::new(mode);
            assert_eq!(a.bidiag_with(&ctrl).unwrap_err(), LinalgError::NotSupported { mode });
        }
    }

    #[test]
    fn mode_checked_before_shape() {
        let wide = Matrix::new([[1.0_f64, 2.0]]);
        let ctrl = BidiagControl::new(DecomposeMode::Zero);
        assert!(matches!(
            wide.bidiag_with(&ctrl),
            Err(LinalgError::NotSupported { .. })
        ));
    }

    #[test]
    fn non_finite_input_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
            a[(1, 0)] = bad;
            assert_eq!(a.bidiag().unwrap_err(), LinalgError::InvalidInput);
        }
    }

    #[test]
    fn factor_shapes_checked() {
        let mut a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let mut u = Matrix::<f64, 2, 2>::zeros();
        let mut v = Matrix::<f64, 2, 2>::zeros();
        let err = bidiagonalize_in_place(&mut a, &mut u, &mut v, &BidiagControl::default(), &Householder)
            .unwrap_err();
        assert_eq!(
            err,
            LinalgError::IncompatibleShape {
                expected: Shape::new(3, 3),
                got: Shape::new(2, 2),
            }
        );
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn input_not_mutated_by_wrapper() {
        let a = Matrix::new([[2.0_f64, -1.0], [0.5, 3.0], [1.0, 1.0]]);
        let copy = a;
        let _ = a.bidiag().unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn diagonal_accessors() {
        let a = Matrix::new([
            [12.0_f64, -51.0, 4.0],
            [6.0, 167.0, -68.0],
            [-4.0, 24.0, -41.0],
        ]);
        let bd = a.bidiag().unwrap();
        let d = bd.diagonal();
        let e = bd.superdiagonal();
        for i in 0..3 {
            assert_eq!(d[i], bd.b()[(i, i)]);
        }
        assert_eq!(e[0], bd.b()[(0, 1)]);
        assert_eq!(e[1], bd.b()[(1, 2)]);
        assert_eq!(e[2], 0.0);
        // Singular values are preserved: ‖B‖_F = ‖A‖_F
        let nb: f64 = d.iter().chain(e.iter()).map(|x| x * x).sum::<f64>().sqrt();
        assert_near(nb, a.frobenius_norm(), 1e-10, "frobenius");
    }

    #[test]
    fn generic_over_backends() {
        let fixed = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0], [5.0, 7.0]]);
        let mut a = DynMatrix::from(fixed);
        let mut u = DynMatrix::zeros(3, 3, 0.0);
        let mut v = DynMatrix::zeros(2, 2, 0.0);
        bidiagonalize_in_place(&mut a, &mut u, &mut v, &BidiagControl::default(), &Householder)
            .unwrap();
        let bd = fixed.bidiag().unwrap();
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(a[(i, j)], bd.b()[(i, j)]);
            }
        }
        assert_eq!(u.shape(), Shape::new(3, 3));
    }

    #[test]
    fn f32_elements() {
        let a = Matrix::new([[3.0_f32, 1.0, 0.0], [1.0, 2.0, 1.0], [0.0, 1.0, 4.0]]);
        let bd = a.bidiag().unwrap();
        let back = *bd.u() * *bd.b() * bd.v().transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-4);
            }
        }
    }

    struct Counting {
        calls: Cell<usize>,
    }

    impl ReflectorBuilder<f64> for Counting {
        fn build(&self, segment: &impl MatrixRef<f64>) -> Reflector<f64> {
            self.calls.set(self.calls.get() + 1);
            Householder.build(segment)
        }
    }

    #[test]
    fn reflector_count() {
        // square n×n: n-1 left + n-2 right; tall: one extra left
        let counting = Counting { calls: Cell::new(0) };
        let a = Matrix::<f64, 4, 4>::eye();
        Bidiagonalization::with_builder(&a, &BidiagControl::default(), &counting).unwrap();
        assert_eq!(counting.calls.get(), 3 + 2);

        counting.calls.set(0);
        let a = Matrix::<f64, 5, 3>::zeros();
        Bidiagonalization::with_builder(&a, &BidiagControl::default(), &counting).unwrap();
        assert_eq!(counting.calls.get(), 3 + 1);

        counting.calls.set(0);
        let a = Matrix::<f64, 4, 1>::zeros();
        Bidiagonalization::with_builder(&a, &BidiagControl::default(), &counting).unwrap();
        assert_eq!(counting.calls.get(), 0);
    }

    struct NanScale;

    impl ReflectorBuilder<f64> for NanScale {
        fn build(&self, segment: &impl MatrixRef<f64>) -> Reflector<f64> {
            Reflector::new(DynVector::zeros(segment.len(), 0.0), f64::NAN)
        }
    }

    struct WrongLength;

    impl ReflectorBuilder<f64> for WrongLength {
        fn build(&self, _segment: &impl MatrixRef<f64>) -> Reflector<f64> {
            Reflector::new(DynVector::from_slice(&[1.0]), 0.0)
        }
    }

    fn fixture() -> Matrix<f64, 3, 3> {
        Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]])
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite values after bidiagonalization step 0")]
    fn non_finite_intermediate_panics_in_debug() {
        let _ = Bidiagonalization::with_builder(&fixture(), &BidiagControl::default(), &NanScale);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn non_finite_intermediate_is_an_error_in_release() {
        let err = Bidiagonalization::with_builder(&fixture(), &BidiagControl::default(), &NanScale)
            .unwrap_err();
        assert_eq!(err, LinalgError::InternalInvariant { step: 0 });
    }

    #[test]
    fn builder_length_mismatch_propagates() {
        let err = Bidiagonalization::with_builder(&fixture(), &BidiagControl::default(), &WrongLength)
            .unwrap_err();
        assert_eq!(
            err,
            LinalgError::IncompatibleShape {
                expected: Shape::new(3, 1),
                got: Shape::new(1, 1),
            }
        );
    }
}

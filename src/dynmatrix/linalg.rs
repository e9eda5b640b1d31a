use crate::linalg::{bidiagonalize_in_place, BidiagControl, Householder, LinalgError, ReflectorBuilder};
use crate::traits::FloatScalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── DynBidiag ───────────────────────────────────────────────────────

/// Bidiagonalization `A = U · B · Vᵀ` of a dynamically-sized matrix (M ≥ N).
///
/// `U` is M×M, `B` is M×N upper bidiagonal and `V` is N×N; `U` and `V` are
/// orthogonal.
///
/// # Example
///
/// ```
/// use linview::DynMatrix;
///
/// let a = DynMatrix::from_rows(4, 2, &[
///     1.0_f64, 2.0,
///     3.0, 4.0,
///     5.0, 6.0,
///     7.0, 8.0,
/// ]);
/// let bd = a.bidiag().unwrap();
/// assert_eq!(bd.u().nrows(), 4);
/// assert_eq!(bd.v().nrows(), 2);
/// for i in 1..4 {
///     assert!(bd.b()[(i, 0)].abs() < 1e-12);
/// }
/// assert!(bd.b()[(2, 1)].abs() < 1e-12);
///
/// let back = &(bd.u() * bd.b()) * &bd.v().transpose();
/// assert!((back[(3, 1)] - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DynBidiag<T> {
    u: DynMatrix<T>,
    b: DynMatrix<T>,
    v: DynMatrix<T>,
}

impl<T: FloatScalar> DynBidiag<T> {
    /// Decompose `a` with the default [`Householder`] reflectors.
    pub fn new(a: &DynMatrix<T>, ctrl: &BidiagControl) -> Result<Self, LinalgError> {
        Self::with_builder(a, ctrl, &Householder)
    }

    /// Decompose `a` with a caller-supplied reflector source.
    pub fn with_builder(
        a: &DynMatrix<T>,
        ctrl: &BidiagControl,
        builder: &impl ReflectorBuilder<T>,
    ) -> Result<Self, LinalgError> {
        let (m, n) = (a.nrows(), a.ncols());
        let mut b = a.clone();
        let mut u = DynMatrix::zeros(m, m, T::zero());
        let mut v = DynMatrix::zeros(n, n, T::zero());
        bidiagonalize_in_place(&mut b, &mut u, &mut v, ctrl, builder)?;
        Ok(Self { u, b, v })
    }

    #[inline]
    pub fn u(&self) -> &DynMatrix<T> {
        &self.u
    }

    #[inline]
    pub fn b(&self) -> &DynMatrix<T> {
        &self.b
    }

    #[inline]
    pub fn v(&self) -> &DynMatrix<T> {
        &self.v
    }

    /// `B[(i, i)]`, length N.
    pub fn diagonal(&self) -> DynVector<T> {
        self.b.diag()
    }

    /// `B[(i, i + 1)]`, length N − 1.
    pub fn superdiagonal(&self) -> DynVector<T> {
        self.b.superdiag()
    }

    #[inline]
    pub fn into_parts(self) -> (DynMatrix<T>, DynMatrix<T>, DynMatrix<T>) {
        (self.u, self.b, self.v)
    }
}

// ── Convenience methods on DynMatrix ────────────────────────────────

impl<T: FloatScalar> DynMatrix<T> {
    /// Bidiagonalization with the default control.
    pub fn bidiag(&self) -> Result<DynBidiag<T>, LinalgError> {
        DynBidiag::new(self, &BidiagControl::default())
    }

    /// Bidiagonalization with an explicit [`BidiagControl`].
    ///
    /// Only `DecomposeMode::Complete` is implemented; other modes return
    /// [`LinalgError::NotSupported`].
    pub fn bidiag_with(&self, ctrl: &BidiagControl) -> Result<DynBidiag<T>, LinalgError> {
        DynBidiag::new(self, ctrl)
    }
}

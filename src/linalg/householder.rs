use alloc::vec;
use alloc::vec::Vec;

use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::LinalgError;
use crate::shape::Shape;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// A Householder reflection `H = I − β·ν·νᵀ`.
///
/// `direction` is ν and `scale` is β. With the standard normalization
/// (`ν[0] = 1`, `β = 2 / νᵀν`) `H` is orthogonal and symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflector<T> {
    direction: DynVector<T>,
    scale: T,
}

impl<T: FloatScalar> Reflector<T> {
    #[inline]
    pub fn new(direction: DynVector<T>, scale: T) -> Self {
        Self { direction, scale }
    }

    /// ν.
    #[inline]
    pub fn direction(&self) -> &DynVector<T> {
        &self.direction
    }

    /// β.
    #[inline]
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Length of ν (the order of `H`).
    #[inline]
    pub fn len(&self) -> usize {
        self.direction.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.direction.is_empty()
    }

    /// The dense `len × len` matrix `I − β·ν·νᵀ`.
    ///
    /// ```
    /// use linview::DynMatrix;
    /// use linview::linalg::{Householder, ReflectorBuilder};
    ///
    /// let x = DynMatrix::from_rows(3, 1, &[2.0_f64, 1.0, 2.0]);
    /// let h = Householder.build(&x).to_matrix();
    /// let hx = &h * &x;
    /// assert!((hx[(0, 0)] - 3.0).abs() < 1e-12);
    /// assert!(hx[(1, 0)].abs() < 1e-12);
    /// assert!(hx[(2, 0)].abs() < 1e-12);
    /// ```
    pub fn to_matrix(&self) -> DynMatrix<T> {
        let n = self.len();
        let v = &self.direction;
        DynMatrix::from_fn(n, n, |i, j| {
            let id = if i == j { T::one() } else { T::zero() };
            id - self.scale * v[i] * v[j]
        })
    }
}

/// Source of Householder reflectors.
///
/// Given a vector segment (one of its dimensions is 1; entries are read in
/// order through [`MatrixRef::get_linear`], so row and column segments are
/// treated alike), return `(ν, β)` such that `(I − β·ν·νᵀ)·x` is zero in
/// every entry but the first.
pub trait ReflectorBuilder<T> {
    fn build(&self, segment: &impl MatrixRef<T>) -> Reflector<T>;
}

/// Householder vector construction (Golub & Van Loan, Algorithm 5.1.1).
///
/// Produces `ν[0] = 1` and `β = 2 / νᵀν`, or `β = 0` when the segment is
/// already a multiple of `e₁`. The leading entry is mapped to `+‖x‖`.
/// The segment is scaled by its largest magnitude first, so any finite
/// input gives a finite reflector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Householder;

impl<T: FloatScalar> ReflectorBuilder<T> for Householder {
    fn build(&self, segment: &impl MatrixRef<T>) -> Reflector<T> {
        let n = segment.len();
        let mut v: Vec<T> = (0..n).map(|idx| *segment.get_linear(idx)).collect();
        if n == 0 {
            return Reflector::new(DynVector::from_vec(v), T::zero());
        }

        let tail_max = v[1..].iter().fold(T::zero(), |m, &x| m.max(x.abs()));
        if tail_max == T::zero() {
            v[0] = T::one();
            return Reflector::new(DynVector::from_vec(v), T::zero());
        }

        // Work on x / max|xᵢ| so the sums of squares neither overflow nor
        // underflow; β and ν are invariant under the scaling.
        let scale = tail_max.max(v[0].abs());
        for x in v.iter_mut() {
            *x = *x / scale;
        }
        let x0 = v[0];
        let sigma = v[1..].iter().fold(T::zero(), |acc, &x| acc + x * x);
        v[0] = T::one();

        let mu = (x0 * x0 + sigma).sqrt();
        // x0 - mu cancels badly for x0 > 0; use the equivalent -sigma / (x0 + mu).
        let v0 = if x0 <= T::zero() {
            x0 - mu
        } else {
            -sigma / (x0 + mu)
        };
        let two = T::one() + T::one();
        let beta = two * v0 * v0 / (sigma + v0 * v0);
        for x in v[1..].iter_mut() {
            *x = *x / v0;
        }

        Reflector::new(DynVector::from_vec(v), beta)
    }
}

/// Left fold: `W ← W − β·ν·(νᵀ·W)`, i.e. `W ← H·W`, in place.
///
/// Requires `ν.len() == W.nrows()`.
pub fn apply_left<T: FloatScalar>(
    w: &mut impl MatrixMut<T>,
    reflector: &Reflector<T>,
) -> Result<(), LinalgError> {
    let (rows, cols) = (w.nrows(), w.ncols());
    if reflector.len() != rows {
        return Err(LinalgError::IncompatibleShape {
            expected: Shape::new(rows, 1),
            got: Shape::new(reflector.len(), 1),
        });
    }
    let nu = reflector.direction.as_slice();
    let beta = reflector.scale;

    for j in 0..cols {
        let col = w.col_as_slice(j, 0);
        let mut dot = T::zero();
        for (&wi, &vi) in col.iter().zip(nu) {
            dot = dot + vi * wi;
        }
        let factor = beta * dot;

        let col = w.col_as_mut_slice(j, 0);
        for (wi, &vi) in col.iter_mut().zip(nu) {
            *wi = *wi - factor * vi;
        }
    }
    Ok(())
}

/// Right fold: `W ← W − β·(W·ν)·νᵀ`, i.e. `W ← W·H`, in place.
///
/// Requires `ν.len() == W.ncols()`.
pub fn apply_right<T: FloatScalar>(
    w: &mut impl MatrixMut<T>,
    reflector: &Reflector<T>,
) -> Result<(), LinalgError> {
    let (rows, cols) = (w.nrows(), w.ncols());
    if reflector.len() != cols {
        return Err(LinalgError::IncompatibleShape {
            expected: Shape::new(1, cols),
            got: Shape::new(1, reflector.len()),
        });
    }
    let nu = reflector.direction.as_slice();
    let beta = reflector.scale;

    // y = W·ν, accumulated column by column
    let mut y = vec![T::zero(); rows];
    for (j, &vj) in nu.iter().enumerate() {
        for (yi, &wij) in y.iter_mut().zip(w.col_as_slice(j, 0)) {
            *yi = *yi + wij * vj;
        }
    }

    for (j, &vj) in nu.iter().enumerate() {
        let factor = beta * vj;
        for (wij, &yi) in w.col_as_mut_slice(j, 0).iter_mut().zip(&y) {
            *wij = *wij - yi * factor;
        }
    }
    Ok(())
}

use core::ops::Mul;

use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    /// `(M×N)·(N×P)`, accumulated one column of `self` at a time.
    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        for (out_col, rhs_col) in out.data.iter_mut().zip(rhs.data.iter()) {
            for (lhs_col, &r) in self.data.iter().zip(rhs_col.iter()) {
                for (o, &l) in out_col.iter_mut().zip(lhs_col.iter()) {
                    *o = *o + l * r;
                }
            }
        }
        out
    }
}

impl<T: Copy, const M: usize, const N: usize> Matrix<T, M, N> {
    pub fn transpose(&self) -> Matrix<T, N, M> {
        Matrix::from_fn(|i, j| self[(j, i)])
    }
}

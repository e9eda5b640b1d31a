use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// `sqrt(Σ aᵢⱼ²)`.
    pub fn frobenius_norm(&self) -> T {
        self.as_slice().iter().fold(T::zero(), |sum, &x| sum + x * x).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frobenius() {
        let m = Matrix::new([[3.0_f64, 0.0], [0.0, -4.0]]);
        assert_eq!(m.frobenius_norm(), 5.0);
    }
}

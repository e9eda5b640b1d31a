//! Shorthands for common sizes.

use crate::Matrix;

pub type Matrix4<T> = Matrix<T, 4, 4>;
pub type Matrix5x3<T> = Matrix<T, 5, 3>;
pub type Matrix6x4<T> = Matrix<T, 6, 4>;

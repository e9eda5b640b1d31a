//! # linview
//!
//! Windowed matrix views, in-place Givens rotations and Householder
//! bidiagonalization over generic dense matrix backends. No-std compatible
//! (with `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use linview::{DynMatrix, Offset, Shape};
//! use linview::linalg::{GivensRotation, Side};
//!
//! let a = DynMatrix::from_rows(4, 3, &[
//!     4.0_f64, 1.0, -2.0,
//!     2.0, 3.0, 1.0,
//!     -1.0, 0.5, 2.0,
//!     3.0, -2.0, 1.0,
//! ]);
//!
//! // A = U · B · Vᵀ with B upper bidiagonal
//! let bd = a.bidiag().unwrap();
//! assert!(bd.b()[(2, 0)].abs() < 1e-12);
//! assert!(bd.b()[(0, 2)].abs() < 1e-12);
//!
//! // Chase out B[(0, 1)] with a column rotation on the leading 3×2 window
//! let mut b = bd.b().clone();
//! let rot = GivensRotation::zeroing(0, 1, b[(0, 0)], b[(0, 1)]);
//! b.view_mut(Offset::new(0, 0), Shape::new(3, 2))
//!     .unwrap()
//!     .rotate(&rot, Side::Right)
//!     .unwrap();
//! assert!(b[(0, 1)].abs() < 1e-12);
//! assert_eq!(b[(0, 2)], bd.b()[(0, 2)]);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Fixed-size `Matrix<T, M, N>` with const-generic dimensions.
//!   Stack-allocated `[[T; M]; N]` column-major storage, products, transpose
//!   and windows.
//!
//! - [`dynmatrix`]: Heap-allocated `DynMatrix<T>` with runtime dimensions.
//!   `Vec<T>` column-major storage, the same layout as `Matrix`. [`DynVector<T>`]
//!   holds Householder directions and extracted diagonals.
//!
//! - [`view`]: [`View`], a rectangular window into any [`MatrixRef`] /
//!   [`MatrixMut`] backend. Element access, bulk assignment and rotations are
//!   all relative to the window.
//!
//! - [`linalg`]: Givens rotations ([`linalg::givens()`],
//!   [`linalg::apply_rotation_in_place`]), Householder reflectors
//!   ([`linalg::Householder`], [`linalg::ReflectorBuilder`]) and
//!   bidiagonalization ([`linalg::bidiagonalize_in_place`] plus the
//!   `bidiag()` convenience methods).
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by rotations and decompositions
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Logging
//!
//! Decompositions emit `log` records under the `linview` target: `debug` at
//! entry and exit, `trace` per step, `warn` for rejected modes and `error`
//! when intermediate state goes non-finite. Install any `log` backend to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` for errors |
//! | `all`     | no       | All features |
//!
//! `num-traits` is always built with its `libm` feature, so `Float` is
//! available without `std`. There is no separate `libm` feature to enable.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
pub mod linalg;
pub mod matrix;
pub mod shape;
pub mod traits;
pub mod view;

pub use dynmatrix::{DynBidiag, DynMatrix, DynVector};
pub use matrix::aliases::{Matrix4, Matrix5x3, Matrix6x4};
pub use matrix::Matrix;
pub use shape::{Offset, Shape};
pub use traits::{all_finite, FloatScalar, MatrixMut, MatrixRef, Scalar};
pub use view::View;

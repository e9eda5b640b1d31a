pub(crate) mod bidiag;
pub(crate) mod givens;
pub(crate) mod householder;

pub use bidiag::{
    bidiagonalize_in_place, BidiagControl, Bidiagonalization, DecomposeMode,
};
pub use givens::{apply_rotation_in_place, givens, GivensRotation, Side};
pub use householder::{apply_left, apply_right, Householder, Reflector, ReflectorBuilder};

use thiserror::Error;

use crate::shape::{Offset, Shape};

/// Errors from views, rotations and decompositions.
///
/// All of these are raised where the violation happens and returned to the
/// immediate caller; nothing is retried internally.
///
/// ```
/// use linview::{DynMatrix, Offset, Shape};
/// use linview::linalg::LinalgError;
///
/// let a = DynMatrix::eye(3, 0.0_f64);
/// let err = a.view(Offset::new(2, 2), Shape::new(2, 1)).unwrap_err();
/// assert!(matches!(err, LinalgError::Shape { .. }));
///
/// let wide = DynMatrix::zeros(2, 3, 0.0_f64);
/// assert!(matches!(wide.bidiag().unwrap_err(), LinalgError::IncompatibleShape { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A view's offset plus size exceeds its parent's shape.
    #[error("view of size {size} at {offset} exceeds parent of size {parent}")]
    Shape {
        offset: Offset,
        size: Shape,
        parent: Shape,
    },
    /// Operand shapes do not match (bulk assignment, `m < n` input, reflector length).
    #[error("incompatible shape: expected {expected}, got {got}")]
    IncompatibleShape { expected: Shape, got: Shape },
    /// A rotation index is not below the extent of the rotated view.
    #[error("index {index} out of range for extent {extent}")]
    IndexOutOfRange { index: usize, extent: usize },
    /// The requested decomposition mode is not implemented.
    #[error("decomposition mode {mode:?} is not supported")]
    NotSupported { mode: DecomposeMode },
    /// The input contains NaN or infinite values.
    #[error("input contains NaN or infinite values")]
    InvalidInput,
    /// NaN or infinite values appeared in intermediate state.
    #[error("non-finite values appeared after bidiagonalization step {step}")]
    InternalInvariant { step: usize },
}

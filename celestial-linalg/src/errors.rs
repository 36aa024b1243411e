//! Error types for vector and matrix operations.
//!
//! Almost every operation in this crate is a total function over its numeric inputs.
//! The few failure modes that remain are collected in [`LinalgError`]:
//!
//! | Variant | Raised by | Typical cause |
//! |---------|-----------|---------------|
//! | [`IndexOutOfBounds`](LinalgError::IndexOutOfBounds) | `try_get`, `try_set`, `Vector::get` | Row, column or component index `>= N` |
//! | [`SingularMatrix`](LinalgError::SingularMatrix) | `try_invert` | Determinant exactly zero (or inside a tolerance) |
//! | [`MathError`](LinalgError::MathError) | `from_column_major`, `try_normalize` | Wrong buffer length, zero-length vector |
//!
//! Note that the plain [`invert`](crate::Matrix4::invert) returns `Option`, not an
//! error: a singular matrix is an expected outcome that callers branch on. Indexing
//! with `m[(row, col)]` or `v[i]` panics on a bad index, since that is a programming
//! error rather than a data condition.
//!
//! ```
//! use celestial_linalg::{LinalgError, Matrix3D};
//!
//! let singular = Matrix3D::zero();
//! match singular.try_invert() {
//!     Err(LinalgError::SingularMatrix { determinant, .. }) => assert_eq!(determinant, 0.0),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Classification of numerical failures reported through [`LinalgError::MathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// A buffer or slice does not hold the number of scalars the type needs.
    DimensionMismatch,
    /// Attempted division by a zero magnitude or determinant.
    DivisionByZero,
}

/// Unified error type for the linear algebra types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Row, column or component index outside `[0, max]`.
    #[error("Index error in {operation}: index {index} out of bounds (valid range: 0-{max})")]
    IndexOutOfBounds {
        operation: String,
        index: usize,
        max: usize,
    },

    /// Matrix has no inverse.
    ///
    /// The determinant is reported in double precision regardless of the matrix scalar type.
    #[error("Singular matrix in {operation}: determinant {determinant:e}")]
    SingularMatrix { operation: String, determinant: f64 },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, LinalgError>`.
pub type LinalgResult<T> = Result<T, LinalgError>;

impl LinalgError {
    /// Creates an [`IndexOutOfBounds`](Self::IndexOutOfBounds) error for a container of
    /// `len` elements.
    pub fn index_out_of_bounds(operation: &str, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            operation: operation.to_string(),
            index,
            max: len.saturating_sub(1),
        }
    }

    /// Creates a [`SingularMatrix`](Self::SingularMatrix) error.
    pub fn singular(operation: &str, determinant: f64) -> Self {
        Self::SingularMatrix {
            operation: operation.to_string(),
            determinant,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_message() {
        let err = LinalgError::index_out_of_bounds("Vector::get", 3, 3);
        assert_eq!(
            err.to_string(),
            "Index error in Vector::get: index 3 out of bounds (valid range: 0-2)"
        );
    }

    #[test]
    fn test_singular_message() {
        let err = LinalgError::singular("Matrix4::try_invert", 0.0);
        assert!(err.to_string().contains("Singular matrix"));
        assert!(err.to_string().contains("Matrix4::try_invert"));
    }

    #[test]
    fn test_math_error_with_kind() {
        let err = LinalgError::math_error(
            "Matrix::from_column_major",
            MathErrorKind::DimensionMismatch,
            "expected 16 scalars, got 9",
        );
        assert!(err.to_string().contains("Math error"));
        assert!(err.to_string().contains("DimensionMismatch"));
        assert!(err.to_string().contains("expected 16 scalars"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<LinalgError>();
        _assert_sync::<LinalgError>();
    }
}

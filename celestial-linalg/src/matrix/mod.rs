//! Square 3×3 and 4×4 matrices stored column-major.
//!
//! [`Matrix<T, N, S>`] holds the elementwise, row and product operations for every size.
//! The size-specific families live in their own impl blocks:
//!
//! | Size | Determinant | Inverse | Transforms |
//! |------|-------------|---------|------------|
//! | 3×3 | closed form | adjugate over determinant | rotation, 2D translation, look-at rotation |
//! | 4×4 | unrolled 24 terms over 2×2 row-pair determinants | cofactors from the same 2×2 determinants | rotation, translation, look-at view matrix |
//!
//! # Singular matrices
//!
//! `invert` returns `None` only when the determinant is exactly zero. Nearly singular
//! input is inverted anyway and the result may be huge; use `invert_with_tolerance`
//! when that matters.
//!
//! ```
//! use celestial_linalg::{Matrix4D, Vector3D};
//!
//! let r = Matrix4D::make_rotation(0.25, &Vector3D::x_axis());
//! let back = r.invert().unwrap().multiply(&r);
//! assert!(back.max_difference(&Matrix4D::identity()) < 1e-14);
//! ```

mod base;
pub mod layout;
mod matrix3;
mod matrix4;
mod ops;
#[cfg(feature = "serde")]
mod serde_;

pub use base::Matrix;
pub use layout::column_major_index;

use crate::space::Untagged;

pub type Matrix3<T, S = Untagged> = Matrix<T, 3, S>;
pub type Matrix4<T, S = Untagged> = Matrix<T, 4, S>;

pub type Matrix3F = Matrix3<f32>;
pub type Matrix4F = Matrix4<f32>;

pub type Matrix3D = Matrix3<f64>;
pub type Matrix4D = Matrix4<f64>;

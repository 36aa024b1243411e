//! Fixed-size vectors and square matrices for graphics transform pipelines.
//!
//! `celestial-linalg` provides 2-, 3- and 4-component vectors and 3×3 / 4×4 matrices in
//! single and double precision. Matrices are stored column-major so their backing buffer
//! can be passed to a graphics API without transposing. Nothing allocates on the heap.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | [`Vector`] and its aliases: arithmetic, dot/cross, normalization, projection |
//! | [`matrix`] | [`Matrix`] and its aliases: products, determinants, inversion, transforms |
//! | [`space`] | Coordinate-space tags and [`declare_space!`] |
//! | [`context`] | [`LookAtContext`] scratch space |
//! | [`scalar`] | The [`Real`] trait implemented by `f32` and `f64` |
//! | [`errors`] | [`LinalgError`] and [`LinalgResult`] |
//! | [`test_helpers`] | ULP and tolerance assertions |
//!
//! # Building a view-projection chain
//!
//! ```
//! use celestial_linalg::{Matrix4D, Vector3D, Vector4D};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let model = Matrix4D::make_translation(Vector3D::new(0.0, 0.0, -2.0))
//!     * Matrix4D::make_rotation_y(FRAC_PI_2);
//! let view = Matrix4D::look_at(
//!     &Vector3D::new(0.0, 0.0, 3.0),
//!     &Vector3D::zeros(),
//!     &Vector3D::y_axis(),
//! );
//! let model_view = view * model;
//!
//! // +X in the model ends up pointing toward -Z, six units in front of the eye
//! let p = model_view * Vector4D::new(1.0, 0.0, 0.0, 1.0);
//! assert!((p.z() + 6.0).abs() < 1e-12);
//!
//! // column-major: the translation sits in the last four scalars
//! assert_eq!(model_view.as_slice()[14], -5.0);
//! ```
//!
//! # Design Notes
//!
//! - **Value semantics**: every operation takes its inputs by reference and returns a
//!   new value, so an output can never alias an input. The `*_in_place` methods cover
//!   the cases where overwriting an operand is wanted.
//!
//! - **Exact singularity test**: [`Matrix::invert`] fails only for a zero determinant.
//!
//! - **Silent degenerate normalize**: [`Vector::normalize`] of a zero vector returns it
//!   unchanged.

pub mod context;
pub mod errors;
pub mod matrix;
pub mod scalar;
pub mod space;
pub mod vector;

pub use context::LookAtContext;
pub use errors::{LinalgError, LinalgResult, MathErrorKind};
pub use matrix::{Matrix, Matrix3, Matrix3D, Matrix3F, Matrix4, Matrix4D, Matrix4F};
pub use scalar::Real;
pub use space::Untagged;
pub use vector::{
    Vector, Vector2, Vector2D, Vector2F, Vector3, Vector3D, Vector3F, Vector4, Vector4D, Vector4F,
};

pub mod test_helpers;

//! Fixed-size vectors with 2, 3 or 4 components.
//!
//! All dimensions and both precisions share one implementation, [`Vector<T, N, S>`],
//! generic over the scalar type `T`, the component count `N` and the coordinate-space
//! tag `S`. The aliases below are what most code names:
//!
//! | Alias | Type |
//! |-------|------|
//! | [`Vector2<T, S>`] / [`Vector3<T, S>`] / [`Vector4<T, S>`] | `Vector<T, 2/3/4, S>` |
//! | [`Vector2F`] / [`Vector3F`] / [`Vector4F`] | single precision, untagged |
//! | [`Vector2D`] / [`Vector3D`] / [`Vector4D`] | double precision, untagged |
//!
//! # Degenerate inputs
//!
//! [`normalize`](Vector::normalize) returns a zero vector unchanged rather than dividing
//! by zero, and [`ortho_normalize`](Vector::ortho_normalize) inherits that policy for
//! parallel inputs. Neither signals anything; [`try_normalize`](Vector::try_normalize)
//! is the checked alternative.
//!
//! ```
//! use celestial_linalg::Vector3D;
//!
//! let zero = Vector3D::zeros();
//! assert_eq!(zero.normalize(), zero);
//! assert!(zero.try_normalize().is_err());
//! ```

mod base;
mod dims;
mod ops;
#[cfg(feature = "serde")]
mod serde_;

pub use base::Vector;

use crate::space::Untagged;

pub type Vector2<T, S = Untagged> = Vector<T, 2, S>;
pub type Vector3<T, S = Untagged> = Vector<T, 3, S>;
pub type Vector4<T, S = Untagged> = Vector<T, 4, S>;

pub type Vector2F = Vector2<f32>;
pub type Vector3F = Vector3<f32>;
pub type Vector4F = Vector4<f32>;

pub type Vector2D = Vector2<f64>;
pub type Vector3D = Vector3<f64>;
pub type Vector4D = Vector4<f64>;

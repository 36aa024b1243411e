//! Compile-time coordinate-space tags.
//!
//! Every [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) carries a third type
//! parameter naming the coordinate space it belongs to. The tag is stored as
//! `PhantomData`, so it has no runtime representation: a tagged `Matrix4<f32, World>`
//! has exactly the same layout, size and column-major buffer as an untagged one. What
//! the tag buys is that the compiler refuses to add a model-space vector to a
//! world-space one, or to transform a view-space point by a model-space matrix.
//!
//! Values default to [`Untagged`]. Declare your own spaces with [`declare_space!`](crate::declare_space):
//!
//! ```
//! use celestial_linalg::{declare_space, Vector3};
//!
//! declare_space!(
//!     /// Object-local coordinates.
//!     Model,
//!     /// Shared scene coordinates.
//!     World,
//! );
//!
//! let a = Vector3::<f32, World>::new(1.0, 0.0, 0.0);
//! let b = Vector3::<f32, World>::new(0.0, 1.0, 0.0);
//! let sum = a + b;
//!
//! let local: Vector3<f32, Model> = sum.retag();
//! assert_eq!(local.to_array(), [1.0, 1.0, 0.0]);
//! ```
//!
//! Mixing spaces is a type error:
//!
//! ```compile_fail
//! use celestial_linalg::{declare_space, Vector3};
//!
//! declare_space!(Model, World);
//!
//! let a = Vector3::<f32, World>::new(1.0, 0.0, 0.0);
//! let b = Vector3::<f32, Model>::new(0.0, 1.0, 0.0);
//! let _ = a + b;
//! ```
//!
//! # One tag per matrix
//!
//! A matrix carries a single tag, not a source/target pair, so
//! [`multiply_vector`](crate::Matrix::multiply_vector) returns a vector in the same
//! space as its input. A transform that crosses spaces (model to eye, say) is tagged
//! with one of them, and the vector is moved across with `retag` at that boundary:
//!
//! ```
//! use celestial_linalg::{declare_space, Matrix4, Vector3, Vector4};
//!
//! declare_space!(Model, Eye);
//!
//! let shift = Vector3::<f64, Eye>::new(0.0, 0.0, -5.0);
//! let model_to_eye = Matrix4::<f64, Eye>::make_translation(shift);
//! let p = Vector4::<f64, Model>::new(1.0, 0.0, 0.0, 1.0);
//!
//! let in_eye: Vector4<f64, Eye> = model_to_eye * p.retag::<Eye>();
//! assert_eq!(in_eye.to_array(), [1.0, 0.0, -5.0, 1.0]);
//! ```

use core::marker::PhantomData;

/// The default space tag: no compile-time space checking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Untagged;

/// Zero-sized carrier for a space tag.
///
/// `fn() -> S` keeps the tag out of auto-trait inference, so `Send`, `Sync` and
/// `Copy` of the containing type depend only on the scalar type.
pub(crate) type SpaceMarker<S> = PhantomData<fn() -> S>;

/// Declares zero-sized marker types usable as space tags.
///
/// Doc comments and attributes placed before each name are forwarded to the generated
/// struct.
#[macro_export]
macro_rules! declare_space {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;
        )+
    };
}

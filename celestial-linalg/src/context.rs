//! Reusable scratch space for camera-basis construction.
//!
//! [`LookAtContext`] bundles the temporaries that `look_at` needs so that callers
//! building many view matrices per frame can keep one around instead of letting each
//! call set up its own. A context carries no state from one call to the next: every
//! field is overwritten before it is read.
//!
//! ```
//! use celestial_linalg::{LookAtContext, Matrix4D, Vector3D};
//!
//! let mut ctx = LookAtContext::new();
//! let up = Vector3D::y_axis();
//! for z in [5.0, 10.0] {
//!     let view = Matrix4D::look_at_with_context(
//!         &mut ctx,
//!         &Vector3D::new(0.0, 0.0, z),
//!         &Vector3D::zeros(),
//!         &up,
//!     );
//!     assert_eq!(view.get(2, 3), -z);
//! }
//! ```

use crate::matrix::{Matrix, Matrix3};
use crate::scalar::Real;
use crate::space::Untagged;
use crate::vector::{Vector, Vector3};

/// Temporaries for `look_at`: the three basis vectors, the rotation they form and the
/// eye translation.
///
/// Fields are public so the last basis can be inspected after a call.
pub struct LookAtContext<T, S = Untagged> {
    pub forward: Vector3<T, S>,
    pub side: Vector3<T, S>,
    pub up: Vector3<T, S>,
    pub rotation: Matrix3<T, S>,
    pub translation: Vector3<T, S>,
}

impl<T: Real, S> LookAtContext<T, S> {
    /// Creates a context with zero vectors and an identity rotation.
    ///
    /// The initial values are never observed by `look_at`; they only matter when
    /// reading the fields before the first call.
    pub fn new() -> Self {
        Self {
            forward: Vector::zeros(),
            side: Vector::zeros(),
            up: Vector::zeros(),
            rotation: Matrix::identity(),
            translation: Vector::zeros(),
        }
    }

    /// Fills every field from the eye `origin`, the point looked at and the up hint.
    ///
    /// A zero-length forward or side vector (target on top of origin, or `up` parallel
    /// to the view direction) is left unnormalized and yields a rank-deficient rotation.
    pub(crate) fn build_basis(
        &mut self,
        origin: &Vector3<T, S>,
        target: &Vector3<T, S>,
        up: &Vector3<T, S>,
    ) {
        self.forward = target.subtract(origin).normalize();
        self.side = self.forward.cross(up).normalize();
        self.up = self.side.cross(&self.forward);

        if self.forward.magnitude_squared() == T::ZERO || self.side.magnitude_squared() == T::ZERO {
            tracing::trace!(
                forward = ?self.forward.to_array().map(Real::to_f64),
                side = ?self.side.to_array().map(Real::to_f64),
                "look_at basis is degenerate"
            );
        }

        self.rotation.set_row(0, &self.side);
        self.rotation.set_row(1, &self.up);
        self.rotation.set_row(2, &-self.forward);
        self.translation = -*origin;
    }
}

impl<T: Real, S> Default for LookAtContext<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real, S> Clone for LookAtContext<T, S> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward,
            side: self.side,
            up: self.up,
            rotation: self.rotation,
            translation: self.translation,
        }
    }
}

impl<T: Real, S> core::fmt::Debug for LookAtContext<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LookAtContext")
            .field("forward", &self.forward)
            .field("side", &self.side)
            .field("up", &self.up)
            .field("rotation", &self.rotation)
            .field("translation", &self.translation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix3D, Vector3D};

    #[test]
    fn test_basis_is_orthonormal() {
        let mut ctx = LookAtContext::<f64>::new();
        ctx.build_basis(
            &Vector3D::new(1.0, 2.0, 3.0),
            &Vector3D::new(-4.0, 0.5, 2.0),
            &Vector3D::y_axis(),
        );

        for v in [ctx.forward, ctx.side, ctx.up] {
            assert!((v.magnitude() - 1.0).abs() < 1e-14);
        }
        assert!(ctx.forward.dot(&ctx.side).abs() < 1e-14);
        assert!(ctx.forward.dot(&ctx.up).abs() < 1e-14);
        assert!(ctx.side.dot(&ctx.up).abs() < 1e-14);
        assert_eq!(ctx.translation, Vector3D::new(-1.0, -2.0, -3.0));

        // rotation maps the view direction onto -Z
        let mapped = ctx.rotation.multiply_vector(&ctx.forward);
        assert!(mapped.max_difference(&Vector3D::new(0.0, 0.0, -1.0)) < 1e-14);
    }

    #[test]
    fn test_prior_contents_are_overwritten() {
        let mut ctx = LookAtContext::<f64>::new();
        ctx.rotation = Matrix3D::zero().scale(f64::NAN);
        ctx.translation = Vector3D::splat(99.0);
        ctx.build_basis(&Vector3D::new(0.0, 0.0, 1.0), &Vector3D::zeros(), &Vector3D::y_axis());
        assert!(ctx.rotation.max_difference(&Matrix3D::identity()) < 1e-15);
        assert_eq!(ctx.translation, Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_degenerate_up_gives_zero_side() {
        let mut ctx = LookAtContext::<f64>::default();
        ctx.build_basis(&Vector3D::zeros(), &Vector3D::new(0.0, 5.0, 0.0), &Vector3D::y_axis());
        assert_eq!(ctx.side, Vector3D::zeros());
        assert_eq!(ctx.rotation.determinant(), 0.0);
    }
}

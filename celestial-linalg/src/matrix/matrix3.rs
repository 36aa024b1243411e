//! 3×3 determinant, inverse and transform construction.
//!
//! A 3×3 matrix doubles as a rotation/scale for 3D vectors and as a full affine
//! transform for 2D points in homogeneous coordinates, which is why
//! [`make_translation`](Matrix::make_translation) takes a 2-component vector.

use super::Matrix;
use crate::context::LookAtContext;
use crate::errors::{LinalgError, LinalgResult};
use crate::scalar::Real;
use crate::vector::Vector;

/// Determinant of a 3×3 block given as rows.
///
/// Expanded along the first row; the six Leibniz terms are written out.
#[inline]
pub(crate) fn determinant3<T: Real>(m: &[[T; 3]; 3]) -> T {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[inline]
pub(crate) fn cofactor_sign<T: Real>(row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 {
        T::ONE
    } else {
        -T::ONE
    }
}

impl<T: Real, S> Matrix<T, 3, S> {
    /// Rows as a plain array, for the closed-form formulas below.
    #[inline]
    fn rows3(&self) -> [[T; 3]; 3] {
        [
            [self.at(0, 0), self.at(0, 1), self.at(0, 2)],
            [self.at(1, 0), self.at(1, 1), self.at(1, 2)],
            [self.at(2, 0), self.at(2, 1), self.at(2, 2)],
        ]
    }

    /// Determinant, written out as the six Leibniz terms.
    ///
    /// ```
    /// use celestial_linalg::Matrix3D;
    ///
    /// let m = Matrix3D::from_rows([[2.0, 0.0, 1.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
    /// assert_eq!(m.determinant(), 24.0);
    /// ```
    pub fn determinant(&self) -> T {
        determinant3(&self.rows3())
    }

    /// Determinant of the 2×2 block left after deleting `row` and `col`.
    #[track_caller]
    pub fn minor(&self, row: usize, col: usize) -> T {
        super::layout::check_line::<3>("row", row);
        super::layout::check_line::<3>("column", col);
        let m = self.rows3();
        let r0 = if row == 0 { 1 } else { 0 };
        let r1 = if row == 2 { 1 } else { 2 };
        let c0 = if col == 0 { 1 } else { 0 };
        let c1 = if col == 2 { 1 } else { 2 };
        m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
    }

    /// Signed minor, `(-1)^(row + col) · minor(row, col)`.
    #[track_caller]
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        cofactor_sign::<T>(row, col) * self.minor(row, col)
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    ///
    /// Computed as the adjugate (transposed cofactor matrix) over the determinant. No
    /// tolerance is applied: a nearly singular matrix yields a very large, poorly
    /// conditioned result rather than `None`. See
    /// [`invert_with_tolerance`](Self::invert_with_tolerance).
    ///
    /// ```
    /// use celestial_linalg::Matrix3D;
    ///
    /// let m = Matrix3D::from_rows([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
    /// let inv = m.invert().unwrap();
    /// assert_eq!(inv.get(2, 2), 0.125);
    ///
    /// assert!(Matrix3D::zero().invert().is_none());
    /// ```
    pub fn invert(&self) -> Option<Self> {
        self.invert_with_tolerance(T::ZERO)
    }

    /// Like [`invert`](Self::invert), but also treats `|determinant| <= tolerance` as
    /// singular. An exactly zero determinant is rejected whatever the tolerance.
    pub fn invert_with_tolerance(&self, tolerance: T) -> Option<Self> {
        self.scaled_adjugate(
            "Matrix3::invert",
            self.determinant(),
            tolerance,
            Self::cofactor,
        )
    }

    /// Like [`invert`](Self::invert), but reports a singular matrix as an error.
    pub fn try_invert(&self) -> LinalgResult<Self> {
        self.invert().ok_or_else(|| {
            LinalgError::singular("Matrix3::try_invert", self.determinant().to_f64())
        })
    }

    /// Inverts in place. Returns `false` and leaves `self` untouched when singular.
    pub fn invert_in_place(&mut self) -> bool {
        match self.invert() {
            Some(inv) => {
                *self = inv;
                true
            }
            None => false,
        }
    }

    /// Rotation by `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// Right-handed: a positive angle turns counterclockwise when looking from the tip
    /// of `axis` toward the origin. `axis` must already be unit length; it is not
    /// normalized here.
    ///
    /// ```
    /// use celestial_linalg::{Matrix3D, Vector3D};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let m = Matrix3D::make_rotation(FRAC_PI_2, &Vector3D::z_axis());
    /// let v = m.multiply_vector(&Vector3D::x_axis());
    /// assert!((v - Vector3D::y_axis()).magnitude() < 1e-15);
    /// ```
    pub fn make_rotation(angle: T, axis: &Vector<T, 3, S>) -> Self {
        let (s, c) = angle.sin_cos();
        let t = T::ONE - c;
        let [x, y, z] = axis.to_array();

        Self::from_rows([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ])
    }

    /// Rotation about +X: a quarter turn takes +Y to +Z.
    pub fn make_rotation_x(angle: T) -> Self {
        Self::make_rotation(angle, &Vector::<T, 3, S>::x_axis())
    }

    /// Rotation about +Y: a quarter turn takes +Z to +X.
    pub fn make_rotation_y(angle: T) -> Self {
        Self::make_rotation(angle, &Vector::<T, 3, S>::y_axis())
    }

    /// Rotation about +Z: a quarter turn takes +X to +Y.
    pub fn make_rotation_z(angle: T) -> Self {
        Self::make_rotation(angle, &Vector::<T, 3, S>::z_axis())
    }

    /// 2D homogeneous translation: identity with `(0, 2) = v.x` and `(1, 2) = v.y`.
    pub fn make_translation(v: Vector<T, 2, S>) -> Self {
        let mut m = Self::identity();
        m.put(0, 2, v.x());
        m.put(1, 2, v.y());
        m
    }

    /// Camera basis looking from `origin` toward `target`.
    ///
    /// Returns the rotation (rows: side, up, -forward) and the translation `-origin`
    /// separately, since a 3×3 matrix cannot hold a 3D translation. The full view
    /// transform of a point `p` is `rotation · (p + translation)`.
    pub fn look_at(
        origin: &Vector<T, 3, S>,
        target: &Vector<T, 3, S>,
        up: &Vector<T, 3, S>,
    ) -> (Self, Vector<T, 3, S>) {
        let mut context = LookAtContext::new();
        Self::look_at_with_context(&mut context, origin, target, up)
    }

    /// [`look_at`](Self::look_at) using caller-owned scratch space.
    pub fn look_at_with_context(
        context: &mut LookAtContext<T, S>,
        origin: &Vector<T, 3, S>,
        target: &Vector<T, 3, S>,
        up: &Vector<T, 3, S>,
    ) -> (Self, Vector<T, 3, S>) {
        context.build_basis(origin, target, up);
        (context.rotation, context.translation)
    }
}

//! 4×4 determinant, Laplace-expansion inverse and homogeneous transforms.

use super::matrix3::{cofactor_sign, determinant3};
use super::Matrix;
use crate::context::LookAtContext;
use crate::errors::{LinalgError, LinalgResult};
use crate::scalar::Real;
use crate::vector::Vector;

/// Row or column indices that survive deleting index `i` from a 4×4 matrix.
const KEPT: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

impl<T: Real, S> Matrix<T, 4, S> {
    /// Rows as a plain array, for the closed-form formulas below.
    #[inline]
    fn rows4(&self) -> [[T; 4]; 4] {
        let mut m = [[T::ZERO; 4]; 4];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = self.at(r, c);
            }
        }
        m
    }

    /// The 3×3 block left after deleting `row` and `col`, as rows.
    fn submatrix(&self, row: usize, col: usize) -> [[T; 3]; 3] {
        let mut out = [[T::ZERO; 3]; 3];
        for (i, &r) in KEPT[row].iter().enumerate() {
            for (j, &c) in KEPT[col].iter().enumerate() {
                out[i][j] = self.at(r, c);
            }
        }
        out
    }

    /// The six 2×2 determinants of rows 0-1 and the six of rows 2-3.
    ///
    /// `upper[k]` and `lower[5 - k]` use complementary column pairs, in the order
    /// (0,1) (0,2) (0,3) (1,2) (1,3) (2,3) for `upper`.
    #[inline]
    fn pair_minors(m: &[[T; 4]; 4]) -> ([T; 6], [T; 6]) {
        let upper = [
            m[0][0] * m[1][1] - m[1][0] * m[0][1],
            m[0][0] * m[1][2] - m[1][0] * m[0][2],
            m[0][0] * m[1][3] - m[1][0] * m[0][3],
            m[0][1] * m[1][2] - m[1][1] * m[0][2],
            m[0][1] * m[1][3] - m[1][1] * m[0][3],
            m[0][2] * m[1][3] - m[1][2] * m[0][3],
        ];
        let lower = [
            m[2][0] * m[3][1] - m[3][0] * m[2][1],
            m[2][0] * m[3][2] - m[3][0] * m[2][2],
            m[2][0] * m[3][3] - m[3][0] * m[2][3],
            m[2][1] * m[3][2] - m[3][1] * m[2][2],
            m[2][1] * m[3][3] - m[3][1] * m[2][3],
            m[2][2] * m[3][3] - m[3][2] * m[2][3],
        ];
        (upper, lower)
    }

    #[inline]
    fn determinant_from_pairs(s: &[T; 6], c: &[T; 6]) -> T {
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Adjugate (transposed cofactor matrix) as rows, reusing the pair minors.
    ///
    /// Entry `[r][c]` equals `cofactor(c, r)`.
    fn adjugate_from_pairs(m: &[[T; 4]; 4], s: &[T; 6], c: &[T; 6]) -> [[T; 4]; 4] {
        [
            [
                m[1][1] * c[5] - m[1][2] * c[4] + m[1][3] * c[3],
                -m[0][1] * c[5] + m[0][2] * c[4] - m[0][3] * c[3],
                m[3][1] * s[5] - m[3][2] * s[4] + m[3][3] * s[3],
                -m[2][1] * s[5] + m[2][2] * s[4] - m[2][3] * s[3],
            ],
            [
                -m[1][0] * c[5] + m[1][2] * c[2] - m[1][3] * c[1],
                m[0][0] * c[5] - m[0][2] * c[2] + m[0][3] * c[1],
                -m[3][0] * s[5] + m[3][2] * s[2] - m[3][3] * s[1],
                m[2][0] * s[5] - m[2][2] * s[2] + m[2][3] * s[1],
            ],
            [
                m[1][0] * c[4] - m[1][1] * c[2] + m[1][3] * c[0],
                -m[0][0] * c[4] + m[0][1] * c[2] - m[0][3] * c[0],
                m[3][0] * s[4] - m[3][1] * s[2] + m[3][3] * s[0],
                -m[2][0] * s[4] + m[2][1] * s[2] - m[2][3] * s[0],
            ],
            [
                -m[1][0] * c[3] + m[1][1] * c[1] - m[1][2] * c[0],
                m[0][0] * c[3] - m[0][1] * c[1] + m[0][2] * c[0],
                -m[3][0] * s[3] + m[3][1] * s[1] - m[3][2] * s[0],
                m[2][0] * s[3] - m[2][1] * s[1] + m[2][2] * s[0],
            ],
        ]
    }

    /// Determinant as the 24-term Leibniz polynomial.
    ///
    /// Written as a Laplace expansion along the first two rows: six products of a
    /// 2×2 determinant from rows 0-1 with the complementary one from rows 2-3.
    ///
    /// ```
    /// use celestial_linalg::Matrix4D;
    ///
    /// let m = Matrix4D::from_rows([
    ///     [2.0, 0.0, 0.0, 1.0],
    ///     [0.0, 3.0, 0.0, 0.0],
    ///     [0.0, 0.0, 4.0, 0.0],
    ///     [0.0, 0.0, 0.0, 5.0],
    /// ]);
    /// assert_eq!(m.determinant(), 120.0);
    /// ```
    pub fn determinant(&self) -> T {
        let m = self.rows4();
        let (s, c) = Self::pair_minors(&m);
        Self::determinant_from_pairs(&s, &c)
    }

    /// Determinant of the 3×3 block left after deleting `row` and `col`.
    #[track_caller]
    pub fn minor(&self, row: usize, col: usize) -> T {
        super::layout::check_line::<4>("row", row);
        super::layout::check_line::<4>("column", col);
        determinant3(&self.submatrix(row, col))
    }

    /// Signed minor, `(-1)^(row + col) · minor(row, col)`.
    #[track_caller]
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        cofactor_sign::<T>(row, col) * self.minor(row, col)
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    ///
    /// Each of the 16 cofactors is the signed 3×3 minor with that row and column
    /// deleted, expanded over the same twelve 2×2 determinants that give
    /// [`determinant`](Self::determinant). The cofactor matrix is divided by the
    /// determinant and transposed. Nearly singular input is not rejected, see
    /// [`invert_with_tolerance`](Self::invert_with_tolerance).
    ///
    /// ```
    /// use celestial_linalg::{Matrix4D, Vector3D};
    ///
    /// let t = Matrix4D::make_translation(Vector3D::new(1.0, 2.0, 3.0));
    /// let inv = t.invert().unwrap();
    /// assert_eq!(inv, Matrix4D::make_translation(Vector3D::new(-1.0, -2.0, -3.0)));
    /// ```
    pub fn invert(&self) -> Option<Self> {
        self.invert_with_tolerance(T::ZERO)
    }

    /// Like [`invert`](Self::invert), but also treats `|determinant| <= tolerance` as
    /// singular. An exactly zero determinant is rejected whatever the tolerance.
    pub fn invert_with_tolerance(&self, tolerance: T) -> Option<Self> {
        let m = self.rows4();
        let (upper, lower) = Self::pair_minors(&m);
        let adjugate = Self::adjugate_from_pairs(&m, &upper, &lower);
        self.scaled_adjugate(
            "Matrix4::invert",
            Self::determinant_from_pairs(&upper, &lower),
            tolerance,
            |_, row, col| adjugate[col][row],
        )
    }

    /// Like [`invert`](Self::invert), but reports a singular matrix as an error.
    pub fn try_invert(&self) -> LinalgResult<Self> {
        self.invert().ok_or_else(|| {
            LinalgError::singular("Matrix4::try_invert", self.determinant().to_f64())
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

    /// Embeds a 3×3 block in the upper left, with identity in the last row and column.
    pub fn from_matrix3(m: &Matrix<T, 3, S>) -> Self {
        let mut out = Self::identity();
        for c in 0..3 {
            for r in 0..3 {
                out.put(r, c, m.at(r, c));
            }
        }
        out
    }

    /// The upper-left 3×3 block.
    pub fn upper_left(&self) -> Matrix<T, 3, S> {
        let mut out = Matrix::<T, 3, S>::zero();
        for c in 0..3 {
            for r in 0..3 {
                out.put(r, c, self.at(r, c));
            }
        }
        out
    }

    /// Rotation by `angle` radians about the unit vector `axis`, as a homogeneous
    /// transform. See [`Matrix3::make_rotation`](crate::Matrix3) for the convention.
    pub fn make_rotation(angle: T, axis: &Vector<T, 3, S>) -> Self {
        Self::from_matrix3(&Matrix::<T, 3, S>::make_rotation(angle, axis))
    }

    /// Homogeneous rotation about +X. See [`Matrix3::make_rotation_x`](crate::Matrix3).
    pub fn make_rotation_x(angle: T) -> Self {
        Self::from_matrix3(&Matrix::<T, 3, S>::make_rotation_x(angle))
    }

    /// Homogeneous rotation about +Y.
    pub fn make_rotation_y(angle: T) -> Self {
        Self::from_matrix3(&Matrix::<T, 3, S>::make_rotation_y(angle))
    }

    /// Homogeneous rotation about +Z.
    pub fn make_rotation_z(angle: T) -> Self {
        Self::from_matrix3(&Matrix::<T, 3, S>::make_rotation_z(angle))
    }

    /// Identity with the translation column `(0..3, 3)` set to `v`.
    pub fn make_translation(v: Vector<T, 3, S>) -> Self {
        let mut m = Self::identity();
        m.put(0, 3, v.x());
        m.put(1, 3, v.y());
        m.put(2, 3, v.z());
        m
    }

    /// View matrix for an eye at `origin` looking at `target`.
    ///
    /// Equal to `R · T(-origin)`, where `R` has rows side, up and -forward. Points in
    /// front of the eye end up on the negative Z axis.
    ///
    /// ```
    /// use celestial_linalg::{Matrix4D, Vector3D, Vector4D};
    ///
    /// let view = Matrix4D::look_at(
    ///     &Vector3D::new(0.0, 0.0, 5.0),
    ///     &Vector3D::zeros(),
    ///     &Vector3D::y_axis(),
    /// );
    /// let p = view.multiply_vector(&Vector4D::new(0.0, 0.0, 0.0, 1.0));
    /// assert_eq!(p, Vector4D::new(0.0, 0.0, -5.0, 1.0));
    /// ```
    pub fn look_at(
        origin: &Vector<T, 3, S>,
        target: &Vector<T, 3, S>,
        up: &Vector<T, 3, S>,
    ) -> Self {
        let mut context = LookAtContext::new();
        Self::look_at_with_context(&mut context, origin, target, up)
    }

    /// [`look_at`](Self::look_at) using caller-owned scratch space.
    pub fn look_at_with_context(
        context: &mut LookAtContext<T, S>,
        origin: &Vector<T, 3, S>,
        target: &Vector<T, 3, S>,
        up: &Vector<T, 3, S>,
    ) -> Self {
        context.build_basis(origin, target, up);
        Self::from_matrix3(&context.rotation)
            .multiply(&Self::make_translation(context.translation))
    }
}

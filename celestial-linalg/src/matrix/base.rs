use core::fmt;
use core::marker::PhantomData;

use super::layout::{check_line, checked_index, column_major_index, try_index};
use crate::errors::{LinalgError, LinalgResult, MathErrorKind};
use crate::scalar::Real;
use crate::space::{SpaceMarker, Untagged};
use crate::vector::Vector;

/// A square `N`×`N` matrix of scalars `T` in coordinate space `S`, stored column-major.
///
/// The backing store is `[[T; N]; N]` indexed `[column][row]`, which flattens to the
/// column-major buffer described in [`layout`](super::layout). A default-constructed
/// matrix is the identity, not zero.
///
/// ```
/// use celestial_linalg::Matrix3D;
///
/// let m = Matrix3D::from_rows([
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
///     [7.0, 8.0, 9.0],
/// ]);
/// assert_eq!(m.get(0, 1), 2.0);
/// // First column comes first in memory
/// assert_eq!(&m.as_slice()[..3], &[1.0, 4.0, 7.0]);
/// assert_eq!(Matrix3D::default(), Matrix3D::identity());
/// ```
#[repr(transparent)]
pub struct Matrix<T, const N: usize, S = Untagged> {
    columns: [[T; N]; N],
    space: SpaceMarker<S>,
}

impl<T: Real, const N: usize, S> Matrix<T, N, S> {
    /// Creates a matrix from its columns: `columns[c][r]` is element `(r, c)`.
    #[inline]
    pub const fn from_columns(columns: [[T; N]; N]) -> Self {
        Self {
            columns,
            space: PhantomData,
        }
    }

    /// Creates a matrix from its rows: `rows[r][c]` is element `(r, c)`.
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        let mut columns = [[T::ZERO; N]; N];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                columns[c][r] = value;
            }
        }
        Self::from_columns(columns)
    }

    /// Copies a column-major buffer of exactly N² scalars.
    pub fn from_column_major(buffer: &[T]) -> LinalgResult<Self> {
        if buffer.len() != N * N {
            return Err(LinalgError::math_error(
                "Matrix::from_column_major",
                MathErrorKind::DimensionMismatch,
                &format!("expected {} scalars, got {}", N * N, buffer.len()),
            ));
        }
        let mut m = Self::zero();
        m.as_mut_slice().copy_from_slice(buffer);
        Ok(m)
    }

    /// Ones on the diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        m.set_identity();
        m
    }

    /// Every element zero.
    pub fn zero() -> Self {
        Self::from_columns([[T::ZERO; N]; N])
    }

    /// The column-major backing buffer of N² scalars.
    ///
    /// This is the layout OpenGL-style APIs expect for matrix uniforms, so it can be
    /// uploaded without transposing.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.columns.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.columns.as_flattened_mut()
    }

    /// Pointer to the first element of the column-major buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Borrows the columns, `columns()[c][r]` being element `(r, c)`.
    #[inline]
    pub fn columns(&self) -> &[[T; N]; N] {
        &self.columns
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.as_slice()[column_major_index::<N>(row, col)]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: T) {
        self.as_mut_slice()[column_major_index::<N>(row, col)] = value;
    }

    /// Returns element `(row, col)`.
    ///
    /// Panics if `row >= N` or `col >= N`. Indexing syntax `m[(row, col)]` behaves the same.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.as_slice()[checked_index::<N>(row, col)]
    }

    /// Sets element `(row, col)`. Panics if `row >= N` or `col >= N`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.as_mut_slice()[checked_index::<N>(row, col)] = value;
    }

    /// Returns element `(row, col)`, or an error for out-of-range indices.
    pub fn try_get(&self, row: usize, col: usize) -> LinalgResult<T> {
        let i = try_index::<N>("Matrix::try_get", row, col)?;
        Ok(self.as_slice()[i])
    }

    /// Sets element `(row, col)`, or returns an error for out-of-range indices.
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> LinalgResult<()> {
        let i = try_index::<N>("Matrix::try_set", row, col)?;
        self.as_mut_slice()[i] = value;
        Ok(())
    }

    /// Returns element `(row, col)` without bounds checking in release builds.
    ///
    /// # Safety
    ///
    /// `row` and `col` must both be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        debug_assert!(row < N && col < N, "Matrix index out of bounds: ({}, {})", row, col);
        *self
            .as_slice()
            .get_unchecked(column_major_index::<N>(row, col))
    }

    /// Sets element `(row, col)` without bounds checking in release builds.
    ///
    /// # Safety
    ///
    /// `row` and `col` must both be less than `N`.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < N && col < N, "Matrix index out of bounds: ({}, {})", row, col);
        *self
            .as_mut_slice()
            .get_unchecked_mut(column_major_index::<N>(row, col)) = value;
    }

    /// Reinterprets this matrix in coordinate space `S2`.
    #[inline]
    pub fn retag<S2>(self) -> Matrix<T, N, S2> {
        Matrix::from_columns(self.columns)
    }

    /// Returns row `r` as a vector. Panics if `r >= N`.
    #[track_caller]
    pub fn row(&self, r: usize) -> Vector<T, N, S> {
        check_line::<N>("row", r);
        let mut out = [T::ZERO; N];
        for (c, slot) in out.iter_mut().enumerate() {
            *slot = self.at(r, c);
        }
        Vector::from_array(out)
    }

    /// Returns column `c` as a vector. Panics if `c >= N`.
    #[track_caller]
    pub fn column(&self, c: usize) -> Vector<T, N, S> {
        check_line::<N>("column", c);
        let mut out = [T::ZERO; N];
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = self.at(r, c);
        }
        Vector::from_array(out)
    }

    /// Overwrites row `r`. Panics if `r >= N`.
    #[track_caller]
    pub fn set_row(&mut self, r: usize, values: &Vector<T, N, S>) {
        check_line::<N>("row", r);
        for (c, &value) in values.as_slice().iter().enumerate() {
            self.put(r, c, value);
        }
    }

    #[track_caller]
    pub fn set_column(&mut self, c: usize, values: &Vector<T, N, S>) {
        check_line::<N>("column", c);
        for (r, &value) in values.as_slice().iter().enumerate() {
            self.put(r, c, value);
        }
    }

    /// Overwrites every element with the identity's.
    pub fn set_identity(&mut self) {
        for c in 0..N {
            for r in 0..N {
                self.put(r, c, if r == c { T::ONE } else { T::ZERO });
            }
        }
    }

    pub fn set_zero(&mut self) {
        self.as_mut_slice().fill(T::ZERO);
    }

    #[inline]
    pub(crate) fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = *self;
        for (a, &b) in out.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, b);
        }
        out
    }

    /// Element-wise sum.
    ///
    /// ```
    /// use celestial_linalg::Matrix3D;
    ///
    /// let two = Matrix3D::identity().add(&Matrix3D::identity());
    /// assert_eq!(two.trace(), 6.0);
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }

    /// Multiplies every element by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        let mut out = *self;
        for a in out.as_mut_slice() {
            *a *= factor;
        }
        out
    }

    /// Returns the transpose. Applying it twice gives back the original bit for bit.
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        out.transpose_in_place();
        out
    }

    /// Swaps each off-diagonal pair `(r, c)` / `(c, r)`; the diagonal is untouched.
    pub fn transpose_in_place(&mut self) {
        for c in 0..N {
            for r in (c + 1)..N {
                let upper = self.at(c, r);
                let lower = self.at(r, c);
                self.put(c, r, lower);
                self.put(r, c, upper);
            }
        }
    }

    /// Elementary row operation: swaps rows `a` and `b`.
    #[track_caller]
    pub fn exchange_rows(&mut self, a: usize, b: usize) {
        check_line::<N>("row", a);
        check_line::<N>("row", b);
        for c in 0..N {
            let tmp = self.at(a, c);
            self.put(a, c, self.at(b, c));
            self.put(b, c, tmp);
        }
    }

    /// Elementary row operation: multiplies row `r` by `factor`.
    #[track_caller]
    pub fn scale_row(&mut self, r: usize, factor: T) {
        check_line::<N>("row", r);
        for c in 0..N {
            self.put(r, c, self.at(r, c) * factor);
        }
    }

    /// Elementary row operation: sets row `row_c` to `row_a + row_b * factor`.
    ///
    /// `row_c` may be either source row.
    #[track_caller]
    pub fn add_row_scaled(&mut self, row_a: usize, row_b: usize, row_c: usize, factor: T) {
        check_line::<N>("row", row_a);
        check_line::<N>("row", row_b);
        check_line::<N>("row", row_c);
        for c in 0..N {
            let value = self.at(row_a, c) + self.at(row_b, c) * factor;
            self.put(row_c, c, value);
        }
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        let mut sum = T::ZERO;
        for i in 0..N {
            sum += self.at(i, i);
        }
        sum
    }

    /// Returns the matrix product `self · other`.
    ///
    /// Composition reads right to left: applying the product to a vector applies
    /// `other` first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        self.multiply_into(other, &mut out);
        out
    }

    /// Writes `self · other` into `out`.
    ///
    /// `out` cannot alias either operand; use [`multiply_in_place`](Self::multiply_in_place)
    /// to overwrite `self`.
    pub fn multiply_into(&self, other: &Self, out: &mut Self) {
        for c in 0..N {
            for r in 0..N {
                let mut sum = T::ZERO;
                for k in 0..N {
                    sum += self.at(r, k) * other.at(k, c);
                }
                out.put(r, c, sum);
            }
        }
    }

    /// Replaces `self` with `self · other`.
    ///
    /// The full product is computed into a local before `self` is written, so every
    /// source element is read from the original matrix.
    pub fn multiply_in_place(&mut self, other: &Self) {
        let mut product = Self::zero();
        self.multiply_into(other, &mut product);
        *self = product;
    }

    /// Returns `self · v` with `v` treated as a column vector.
    ///
    /// Component `i` of the result is the dot product of row `i` with `v`.
    pub fn multiply_vector(&self, v: &Vector<T, N, S>) -> Vector<T, N, S> {
        let mut out = [T::ZERO; N];
        for (r, slot) in out.iter_mut().enumerate() {
            let mut sum = T::ZERO;
            for (c, &x) in v.as_slice().iter().enumerate() {
                sum += self.at(r, c) * x;
            }
            *slot = sum;
        }
        Vector::from_array(out)
    }

    /// Returns the maximum absolute difference between corresponding elements.
    ///
    /// ```
    /// use celestial_linalg::Matrix4D;
    ///
    /// let a = Matrix4D::identity();
    /// let mut b = a;
    /// b.set(2, 3, 0.001);
    /// assert!((a.max_difference(&b) - 0.001).abs() < 1e-15);
    /// ```
    pub fn max_difference(&self, other: &Self) -> T {
        let mut max_diff = T::ZERO;
        for (&a, &b) in self.as_slice().iter().zip(other.as_slice()) {
            max_diff = max_diff.max((a - b).abs());
        }
        max_diff
    }

    /// Adjugate over determinant, shared by the 3×3 and 4×4 inversions.
    ///
    /// Builds the cofactor matrix, scales it by `1 / determinant` and transposes it.
    /// Returns `None` when the determinant is exactly zero or `|determinant| <= tolerance`.
    /// A zero, negative or NaN tolerance leaves only the exact test.
    pub(crate) fn scaled_adjugate(
        &self,
        operation: &'static str,
        determinant: T,
        tolerance: T,
        cofactor: impl Fn(&Self, usize, usize) -> T,
    ) -> Option<Self> {
        if determinant == T::ZERO || determinant.abs() <= tolerance {
            tracing::trace!(
                operation = operation,
                determinant = determinant.to_f64(),
                tolerance = tolerance.to_f64(),
                "matrix is singular, no inverse"
            );
            return None;
        }
        let inv_det = T::ONE / determinant;
        let mut out = Self::zero();
        for c in 0..N {
            for r in 0..N {
                out.put(r, c, cofactor(self, r, c) * inv_det);
            }
        }
        out.transpose_in_place();
        Some(out)
    }
}

impl<T: Copy, const N: usize, S> Clone for Matrix<T, N, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, const N: usize, S> Copy for Matrix<T, N, S> {}

impl<T: PartialEq, const N: usize, S> PartialEq for Matrix<T, N, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl<T: Real, const N: usize, S> Default for Matrix<T, N, S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: fmt::Debug, const N: usize, S> fmt::Debug for Matrix<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("columns", &self.columns)
            .finish()
    }
}

impl<T: Real, const N: usize, S> fmt::Display for Matrix<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix{}:", N)?;
        for r in 0..N {
            write!(f, "  [")?;
            for c in 0..N {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:12.9}", self.at(r, c))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix3D, Matrix4D, Matrix4F, Vector3D, Vector4D};

    fn sample4() -> Matrix4D {
        Matrix4D::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    #[test]
    fn test_identity_and_get() {
        let m = Matrix4D::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(3, 3), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(Matrix4D::default(), m);
    }

    #[test]
    fn test_column_major_buffer() {
        let m = sample4();
        assert_eq!(
            m.as_slice(),
            &[
                1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0,
                16.0
            ]
        );
        assert_eq!(m.columns()[1], [2.0, 6.0, 10.0, 14.0]);
        assert_eq!(unsafe { *m.as_ptr().add(4) }, 2.0);
    }

    #[test]
    fn test_from_column_major() {
        let m = sample4();
        let copy = Matrix4D::from_column_major(m.as_slice()).unwrap();
        assert_eq!(copy, m);

        let err = Matrix4D::from_column_major(&[0.0; 9]).unwrap_err();
        assert!(err.to_string().contains("expected 16 scalars, got 9"));
    }

    #[test]
    fn test_set_and_try_accessors() {
        let mut m = Matrix3D::identity();
        m.set(0, 2, 0.5);
        assert_eq!(m.get(0, 2), 0.5);
        assert_eq!(m.as_slice()[6], 0.5);

        m.try_set(2, 0, -1.0).unwrap();
        assert_eq!(m.try_get(2, 0).unwrap(), -1.0);
        assert!(m.try_get(3, 0).is_err());
        assert!(m.try_set(0, 3, 1.0).is_err());
    }

    #[test]
    fn test_unchecked_accessors() {
        let mut m = Matrix4F::zero();
        unsafe {
            m.set_unchecked(1, 3, 7.0);
            assert_eq!(m.get_unchecked(1, 3), 7.0);
        }
        assert_eq!(m.get(1, 3), 7.0);
    }

    #[test]
    #[should_panic(expected = "Matrix index out of bounds")]
    fn test_get_panics_out_of_range() {
        let m = Matrix3D::identity();
        let _ = m.get(3, 0);
    }

    #[test]
    fn test_rows_and_columns() {
        let mut m = sample4();
        assert_eq!(m.row(1), Vector4D::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m.column(1), Vector4D::new(2.0, 6.0, 10.0, 14.0));

        m.set_row(0, &Vector4D::splat(-1.0));
        assert_eq!(m.get(0, 3), -1.0);
        m.set_column(2, &Vector4D::zeros());
        assert_eq!(m.column(2), Vector4D::zeros());
    }

    #[test]
    #[should_panic(expected = "Matrix row index out of bounds: 4")]
    fn test_row_panics_out_of_range() {
        let _ = sample4().row(4);
    }

    #[test]
    fn test_add_subtract_scale() {
        let a = sample4();
        let sum = a.add(&Matrix4D::identity());
        assert_eq!(sum.get(0, 0), 2.0);
        assert_eq!(sum.get(0, 1), 2.0);
        assert_eq!(sum.subtract(&Matrix4D::identity()), a);
        assert_eq!(a.scale(2.0).get(3, 2), 30.0);
    }

    #[test]
    fn test_transpose() {
        let m = sample4();
        let t = m.transpose();
        assert_eq!(t.get(0, 3), 13.0);
        assert_eq!(t.get(3, 0), 4.0);
        assert_eq!(t.trace(), m.trace());
        assert_eq!(t.transpose(), m);

        let mut in_place = m;
        in_place.transpose_in_place();
        assert_eq!(in_place, t);
    }

    #[test]
    fn test_row_operations() {
        let mut m = Matrix3D::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);

        m.exchange_rows(0, 2);
        assert_eq!(m.row(0), Vector3D::new(7.0, 8.0, 9.0));
        assert_eq!(m.row(2), Vector3D::new(1.0, 2.0, 3.0));

        m.scale_row(1, 0.5);
        assert_eq!(m.row(1), Vector3D::new(2.0, 2.5, 3.0));

        // row 0 <- row 0 + row 2 * -7
        m.add_row_scaled(0, 2, 0, -7.0);
        assert_eq!(m.row(0), Vector3D::new(0.0, -6.0, -12.0));

        m.add_row_scaled(2, 1, 1, 2.0);
        assert_eq!(m.row(1), Vector3D::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn test_identity_zero_trace() {
        let mut m = sample4();
        assert_eq!(m.trace(), 34.0);
        m.set_zero();
        assert_eq!(m, Matrix4D::zero());
        assert_eq!(m.trace(), 0.0);
        m.set_identity();
        assert_eq!(m.trace(), 4.0);
    }

    #[test]
    fn test_multiply() {
        let a = Matrix3D::from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        let b = Matrix3D::from_rows([[1.0, 0.0, 0.0], [3.0, 1.0, 0.0], [0.0, 1.0, 1.0]]);
        let expected = Matrix3D::from_rows([[7.0, 2.0, 0.0], [3.0, 1.0, 0.0], [0.0, 2.0, 2.0]]);
        assert_eq!(a.multiply(&b), expected);

        let mut out = Matrix3D::zero();
        a.multiply_into(&b, &mut out);
        assert_eq!(out, expected);

        let mut in_place = a;
        in_place.multiply_in_place(&b);
        assert_eq!(in_place, expected);

        assert_eq!(sample4().multiply(&Matrix4D::identity()), sample4());
    }

    #[test]
    fn test_multiply_in_place_by_self() {
        let a = Matrix3D::from_rows([[1.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 1.0]]);
        let mut m = a;
        m.multiply_in_place(&a);
        assert_eq!(m, a.multiply(&a));
    }

    #[test]
    fn test_multiply_vector_uses_rows() {
        let m = sample4();
        let v = Vector4D::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(m.multiply_vector(&v), Vector4D::new(5.0, 13.0, 21.0, 29.0));
    }

    #[test]
    fn test_max_difference() {
        let a = Matrix3D::identity();
        let mut b = a;
        b.set(0, 1, 0.1);
        assert!((a.max_difference(&b) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Matrix3D::identity());
        assert!(s.starts_with("Matrix3:"));
        assert_eq!(s.lines().count(), 4);
        assert!(s.contains("1.000000000"));
    }
}

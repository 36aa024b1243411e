use core::fmt;
use core::marker::PhantomData;

use crate::errors::{LinalgError, LinalgResult, MathErrorKind};
use crate::scalar::Real;
use crate::space::{SpaceMarker, Untagged};

/// A fixed-size vector of `N` scalars of type `T`, tagged with coordinate space `S`.
///
/// Components are stored by value in a `[T; N]`; the space tag has no runtime
/// representation. Most code uses the dimension aliases
/// ([`Vector2`](super::Vector2), [`Vector3`](super::Vector3), [`Vector4`](super::Vector4))
/// or the precision-fixed ones (`Vector3F`, `Vector3D`, ...).
///
/// Operations return new values, so every "output aliases an input" case of an
/// in-place API is simply `v = v.op(...)`.
///
/// ```
/// use celestial_linalg::Vector3D;
///
/// let v = Vector3D::new(3.0, 4.0, 0.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.normalize(), Vector3D::new(0.6, 0.8, 0.0));
/// ```
#[repr(transparent)]
pub struct Vector<T, const N: usize, S = Untagged> {
    components: [T; N],
    space: SpaceMarker<S>,
}

impl<T: Real, const N: usize, S> Vector<T, N, S> {
    /// Creates a vector from an array of components.
    #[inline]
    pub const fn from_array(components: [T; N]) -> Self {
        Self {
            components,
            space: PhantomData,
        }
    }

    /// Returns the zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::ZERO)
    }

    /// Returns a vector with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.components
    }

    /// Borrows the components as a contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// Returns the component at `index`.
    ///
    /// Returns an error for indices outside `0..N`. Indexing syntax `v[i]` panics instead.
    pub fn get(&self, index: usize) -> LinalgResult<T> {
        self.components
            .get(index)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_bounds("Vector::get", index, N))
    }

    /// Sets the component at `index`.
    ///
    /// Returns an error for indices outside `0..N`. Indexing syntax `v[i] = x` panics instead.
    pub fn set(&mut self, index: usize, value: T) -> LinalgResult<()> {
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LinalgError::index_out_of_bounds("Vector::set", index, N)),
        }
    }

    /// Returns the component at `index` without bounds checking in release builds.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        debug_assert!(index < N, "Vector index out of bounds: {}", index);
        *self.components.get_unchecked(index)
    }

    /// Reinterprets this vector in coordinate space `S2`.
    #[inline]
    pub fn retag<S2>(self) -> Vector<T, N, S2> {
        Vector::from_array(self.components)
    }

    #[inline]
    pub(crate) fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self::from_array(self.components.map(f))
    }

    #[inline]
    pub(crate) fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = self.components;
        for (a, &b) in out.iter_mut().zip(other.components.iter()) {
            *a = f(*a, b);
        }
        Self::from_array(out)
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }

    /// Componentwise difference `self - other`.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }

    /// Multiplies every component by `factor`.
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        self.map(|a| a * factor)
    }

    /// Returns `self + other * r`.
    #[inline]
    pub fn add_scaled(&self, other: &Self, r: T) -> Self {
        self.zip_map(other, |a, b| a + b * r)
    }

    /// Componentwise absolute value.
    #[inline]
    pub fn absolute(&self) -> Self {
        self.map(Real::abs)
    }

    /// Clamps every component into `[minimum, maximum]`.
    #[inline]
    pub fn clamp(&self, minimum: T, maximum: T) -> Self {
        self.map(|a| a.max(minimum).min(maximum))
    }

    /// Clamps component `i` into `[minimum[i], maximum[i]]`.
    pub fn clamp_by_vector(&self, minimum: &Self, maximum: &Self) -> Self {
        let mut out = self.components;
        for (i, a) in out.iter_mut().enumerate() {
            *a = a.max(minimum.components[i]).min(maximum.components[i]);
        }
        Self::from_array(out)
    }

    /// Raises every component to at least `minimum`.
    #[inline]
    pub fn clamp_minimum(&self, minimum: T) -> Self {
        self.map(|a| a.max(minimum))
    }

    /// Lowers every component to at most `maximum`.
    #[inline]
    pub fn clamp_maximum(&self, maximum: T) -> Self {
        self.map(|a| a.min(maximum))
    }

    /// Returns `self * (1 - alpha) + other * alpha`.
    ///
    /// `alpha` is not restricted to `[0, 1]`; values outside extrapolate along the line.
    ///
    /// ```
    /// use celestial_linalg::Vector2D;
    ///
    /// let a = Vector2D::new(0.0, 10.0);
    /// let b = Vector2D::new(10.0, 20.0);
    /// assert_eq!(a.interpolate_linear(&b, 0.5), Vector2D::new(5.0, 15.0));
    /// assert_eq!(a.interpolate_linear(&b, 2.0), Vector2D::new(20.0, 30.0));
    /// ```
    #[inline]
    pub fn interpolate_linear(&self, other: &Self, alpha: T) -> Self {
        let keep = T::ONE - alpha;
        self.zip_map(other, |a, b| a * keep + b * alpha)
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use celestial_linalg::Vector3D;
    ///
    /// let a = Vector3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(a.dot(&Vector3D::new(4.0, -5.0, 6.0)), 12.0);
    /// assert_eq!(Vector3D::x_axis().dot(&Vector3D::y_axis()), 0.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::ZERO;
        for i in 0..N {
            sum += self.components[i] * other.components[i];
        }
        sum
    }

    /// Faster than [`magnitude`](Self::magnitude) when only comparing lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the Euclidean length (L2 norm).
    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        self.subtract(other).magnitude()
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the squared magnitude is exactly zero the vector is returned unchanged
    /// instead of dividing by zero. Use [`try_normalize`](Self::try_normalize) to
    /// detect that case.
    pub fn normalize(&self) -> Self {
        let mag_sq = self.magnitude_squared();
        if mag_sq == T::ZERO {
            return *self;
        }
        let mag = mag_sq.sqrt();
        self.map(|a| a / mag)
    }

    /// Like [`normalize`](Self::normalize), but reports a zero-length vector as an error.
    pub fn try_normalize(&self) -> LinalgResult<Self> {
        if self.magnitude_squared() == T::ZERO {
            return Err(LinalgError::math_error(
                "Vector::try_normalize",
                MathErrorKind::DivisionByZero,
                "cannot normalize a zero-length vector",
            ));
        }
        Ok(self.normalize())
    }

    /// Projects `self` onto `onto`: `onto * (self·onto / |onto|²)`.
    ///
    /// Projecting onto the zero vector yields NaN components.
    #[inline]
    pub fn projection(&self, onto: &Self) -> Self {
        onto.scale(self.dot(onto) / onto.magnitude_squared())
    }

    /// Gram-Schmidt: returns `(u0, u1)` where `u0` is `self` normalized and `u1` is
    /// `other` with its component along `u0` removed, then normalized.
    ///
    /// If the inputs are parallel the remainder is zero and `u1` comes back as the
    /// zero vector, following the [`normalize`](Self::normalize) policy.
    ///
    /// ```
    /// use celestial_linalg::Vector3D;
    ///
    /// let (u0, u1) = Vector3D::new(2.0, 0.0, 0.0).ortho_normalize(&Vector3D::new(1.0, 1.0, 0.0));
    /// assert_eq!(u0, Vector3D::new(1.0, 0.0, 0.0));
    /// assert_eq!(u1, Vector3D::new(0.0, 1.0, 0.0));
    /// ```
    pub fn ortho_normalize(&self, other: &Self) -> (Self, Self) {
        let u0 = self.normalize();
        let remainder = other.add_scaled(&u0, -other.dot(&u0));
        if remainder.magnitude_squared() == T::ZERO {
            tracing::trace!(
                dimension = N,
                "ortho_normalize: inputs are parallel, second basis vector is zero"
            );
        }
        (u0, remainder.normalize())
    }

    /// Returns the largest absolute componentwise difference.
    pub fn max_difference(&self, other: &Self) -> T {
        let mut max_diff = T::ZERO;
        for i in 0..N {
            max_diff = max_diff.max((self.components[i] - other.components[i]).abs());
        }
        max_diff
    }
}

impl<T: Copy, const N: usize, S> Clone for Vector<T, N, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, const N: usize, S> Copy for Vector<T, N, S> {}

impl<T: PartialEq, const N: usize, S> PartialEq for Vector<T, N, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl<T: Real, const N: usize, S> Default for Vector<T, N, S> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real, const N: usize, S> From<[T; N]> for Vector<T, N, S> {
    fn from(components: [T; N]) -> Self {
        Self::from_array(components)
    }
}

impl<T: Real, const N: usize, S> From<Vector<T, N, S>> for [T; N] {
    fn from(v: Vector<T, N, S>) -> Self {
        v.components
    }
}

impl<T: fmt::Debug, const N: usize, S> fmt::Debug for Vector<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.components).finish()
    }
}

impl<T: Real, const N: usize, S> fmt::Display for Vector<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{}(", N)?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.9}", c)?;
        }
        write!(f, ")")
    }
}

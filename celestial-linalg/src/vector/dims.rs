//! Dimension-specific constructors and accessors, and the 3-component cross product.

use super::Vector;
use crate::scalar::Real;

impl<T: Real, S> Vector<T, 2, S> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// Component 0.
    #[inline]
    pub fn x(&self) -> T {
        self.to_array()[0]
    }

    /// Component 1.
    #[inline]
    pub fn y(&self) -> T {
        self.to_array()[1]
    }

    /// Appends a third component.
    #[inline]
    pub fn extend(&self, z: T) -> Vector<T, 3, S> {
        Vector::<T, 3, S>::new(self.x(), self.y(), z)
    }
}

impl<T: Real, S> Vector<T, 3, S> {
    /// Creates a vector from its three components.
    ///
    /// ```
    /// use celestial_linalg::Vector3D;
    ///
    /// let v = Vector3D::new(1.0, 2.0, 3.0);
    /// assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Component 0.
    #[inline]
    pub fn x(&self) -> T {
        self.to_array()[0]
    }

    /// Component 1.
    #[inline]
    pub fn y(&self) -> T {
        self.to_array()[1]
    }

    /// Component 2.
    #[inline]
    pub fn z(&self) -> T {
        self.to_array()[2]
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs, with direction given by the
    /// right-hand rule. Its magnitude equals `|a||b|sin(θ)`.
    ///
    /// ```
    /// use celestial_linalg::Vector3F;
    ///
    /// let z = Vector3F::x_axis().cross(&Vector3F::y_axis());
    /// assert_eq!(z, Vector3F::z_axis());
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.to_array();
        let [bx, by, bz] = other.to_array();
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends a fourth (homogeneous) component.
    #[inline]
    pub fn extend(&self, w: T) -> Vector<T, 4, S> {
        Vector::<T, 4, S>::from_xyz_w(self, w)
    }

    /// Drops the third component.
    #[inline]
    pub fn truncate(&self) -> Vector<T, 2, S> {
        Vector::<T, 2, S>::new(self.x(), self.y())
    }
}

impl<T: Real, S> Vector<T, 4, S> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Builds `[v.x, v.y, v.z, w]`. Use `w = 1` for points and `w = 0` for directions.
    #[inline]
    pub fn from_xyz_w(v: &Vector<T, 3, S>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    #[inline]
    pub fn x(&self) -> T {
        self.to_array()[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.to_array()[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.to_array()[2]
    }

    /// Homogeneous component: 1 for points, 0 for directions.
    #[inline]
    pub fn w(&self) -> T {
        self.to_array()[3]
    }

    /// Returns the first three components, without dividing by `w`.
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3, S> {
        Vector::<T, 3, S>::new(self.x(), self.y(), self.z())
    }
}

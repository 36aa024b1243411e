//! Floating point scalar abstraction.
//!
//! Every vector and matrix is generic over its element type through [`Real`], which
//! is implemented for `f32` and `f64`. Square roots, trigonometry and min/max go
//! through `libm`, so single and double precision results are the same on every
//! target regardless of the platform math library.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An IEEE-754 floating point element type (`f32` or `f64`).
pub trait Real:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    /// Returns `(sin, cos)` of an angle in radians.
    fn sin_cos(self) -> (Self, Self);
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Lossy for `f32`.
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        libm::fmin(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        libm::fmax(self, other)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        libm::fminf(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        libm::fmaxf(self, other)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

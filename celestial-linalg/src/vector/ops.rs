//! Arithmetic operators for [`Vector`].
//!
//! Implements `+`, `-`, `*` and `/` by a scalar, unary `-`, their compound-assignment
//! forms, `scalar * vector` for `f32`/`f64`, and `v[i]` indexing. Both operands of a
//! binary vector operator must share the same space tag.

use super::Vector;
use crate::scalar::Real;
use core::ops::*;

/// Vector + Vector
impl<T: Real, const N: usize, S> Add for Vector<T, N, S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector::add(&self, &rhs)
    }
}

/// Vector - Vector
impl<T: Real, const N: usize, S> Sub for Vector<T, N, S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

/// Vector * scalar
impl<T: Real, const N: usize, S> Mul<T> for Vector<T, N, S> {
    type Output = Self;
    #[inline]
    fn mul(self, k: T) -> Self {
        self.scale(k)
    }
}

/// Vector / scalar
impl<T: Real, const N: usize, S> Div<T> for Vector<T, N, S> {
    type Output = Self;
    #[inline]
    fn div(self, k: T) -> Self {
        self.map(|a| a / k)
    }
}

/// -Vector
impl<T: Real, const N: usize, S> Neg for Vector<T, N, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Real, const N: usize, S> AddAssign for Vector<T, N, S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vector::add(self, &rhs);
    }
}

impl<T: Real, const N: usize, S> SubAssign for Vector<T, N, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(&rhs);
    }
}

impl<T: Real, const N: usize, S> MulAssign<T> for Vector<T, N, S> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        *self = self.scale(k);
    }
}

impl<T: Real, const N: usize, S> DivAssign<T> for Vector<T, N, S> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        *self = *self / k;
    }
}

/// v[i] indexing (panics if i >= N)
impl<T: Real, const N: usize, S> Index<usize> for Vector<T, N, S> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(c) => c,
            None => panic!("Vector index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i >= N)
impl<T: Real, const N: usize, S> IndexMut<usize> for Vector<T, N, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.as_mut_slice().get_mut(index) {
            Some(c) => c,
            None => panic!("Vector index out of bounds: {}", index),
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            /// scalar * Vector
            impl<const N: usize, S> Mul<Vector<$t, N, S>> for $t {
                type Output = Vector<$t, N, S>;
                #[inline]
                fn mul(self, v: Vector<$t, N, S>) -> Vector<$t, N, S> {
                    v.scale(self)
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64);

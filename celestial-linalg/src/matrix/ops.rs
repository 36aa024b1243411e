//! Arithmetic operators for [`Matrix`].
//!
//! `*` between matrices is the matrix product and is provided for every combination of
//! owned and borrowed operands, matching [`Matrix::multiply`]. `m * v` transforms a
//! column vector. `m[(row, col)]` indexes with bounds checking.

use super::layout::checked_index;
use super::Matrix;
use crate::scalar::Real;
use crate::vector::Vector;
use core::ops::*;

/// Matrix + Matrix
impl<T: Real, const N: usize, S> Add for Matrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Matrix::add(&self, &rhs)
    }
}

/// Matrix - Matrix
impl<T: Real, const N: usize, S> Sub for Matrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

/// -Matrix
impl<T: Real, const N: usize, S> Neg for Matrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.scale(-T::ONE)
    }
}

/// Matrix * scalar
impl<T: Real, const N: usize, S> Mul<T> for Matrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn mul(self, k: T) -> Self {
        self.scale(k)
    }
}

/// Matrix * Matrix
impl<T: Real, const N: usize, S> Mul for Matrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

/// &Matrix * &Matrix
impl<T: Real, const N: usize, S> Mul<&Matrix<T, N, S>> for &Matrix<T, N, S> {
    type Output = Matrix<T, N, S>;
    #[inline]
    fn mul(self, rhs: &Matrix<T, N, S>) -> Matrix<T, N, S> {
        self.multiply(rhs)
    }
}

/// Matrix * &Matrix
impl<T: Real, const N: usize, S> Mul<&Matrix<T, N, S>> for Matrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: &Self) -> Self {
        self.multiply(rhs)
    }
}

/// &Matrix * Matrix
impl<T: Real, const N: usize, S> Mul<Matrix<T, N, S>> for &Matrix<T, N, S> {
    type Output = Matrix<T, N, S>;
    #[inline]
    fn mul(self, rhs: Matrix<T, N, S>) -> Matrix<T, N, S> {
        self.multiply(&rhs)
    }
}

/// Matrix * Vector
impl<T: Real, const N: usize, S> Mul<Vector<T, N, S>> for Matrix<T, N, S> {
    type Output = Vector<T, N, S>;
    #[inline]
    fn mul(self, v: Vector<T, N, S>) -> Vector<T, N, S> {
        self.multiply_vector(&v)
    }
}

/// &Matrix * &Vector
impl<T: Real, const N: usize, S> Mul<&Vector<T, N, S>> for &Matrix<T, N, S> {
    type Output = Vector<T, N, S>;
    #[inline]
    fn mul(self, v: &Vector<T, N, S>) -> Vector<T, N, S> {
        self.multiply_vector(v)
    }
}

impl<T: Real, const N: usize, S> MulAssign for Matrix<T, N, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_in_place(&rhs);
    }
}

impl<T: Real, const N: usize, S> AddAssign for Matrix<T, N, S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Matrix::add(self, &rhs);
    }
}

impl<T: Real, const N: usize, S> SubAssign for Matrix<T, N, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(&rhs);
    }
}

/// m[(row, col)] indexing (panics if either index >= N)
impl<T: Real, const N: usize, S> Index<(usize, usize)> for Matrix<T, N, S> {
    type Output = T;
    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.as_slice()[checked_index::<N>(row, col)]
    }
}

/// m[(row, col)] = value mutable indexing (panics if either index >= N)
impl<T: Real, const N: usize, S> IndexMut<(usize, usize)> for Matrix<T, N, S> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.as_mut_slice()[checked_index::<N>(row, col)]
    }
}

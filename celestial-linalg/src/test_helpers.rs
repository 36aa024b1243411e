//! Floating-point assertions for tests.
//!
//! ULP comparisons for single scalars, and absolute-tolerance comparisons for whole
//! vectors and matrices that report the first offending component.

use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::vector::Vector;

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn f32_to_ordered_u32(x: f32) -> u32 {
    let bits = x.to_bits();
    if bits & 0x8000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000
    }
}

/// Number of representable `f64` values between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

/// Number of representable `f32` values between `a` and `b`.
#[inline]
pub fn ulp_diff_f32(a: f32, b: f32) -> u32 {
    f32_to_ordered_u32(a).abs_diff(f32_to_ordered_u32(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[track_caller]
pub fn assert_float_eq(a: f64, b: f64, max_ulp: u64) {
    assert_ulp_le(a, b, max_ulp, "assert_float_eq");
}

#[track_caller]
pub fn assert_float_eq_f32(a: f32, b: f32, max_ulp: u32) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value: {} vs {}", a, b);
    let d = ulp_diff_f32(a, b);
    assert!(
        d <= max_ulp,
        "ULP={} exceeds {}, a={} (0x{:08x}) b={} (0x{:08x})",
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts every component of `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_vector_near<T: Real, const N: usize, S>(
    actual: &Vector<T, N, S>,
    expected: &Vector<T, N, S>,
    tolerance: T,
) {
    for (i, (&a, &e)) in actual.as_slice().iter().zip(expected.as_slice()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "component {}: {} vs {} (diff {:e} > {:e})",
            i,
            a.to_f64(),
            e.to_f64(),
            diff.to_f64(),
            tolerance.to_f64()
        );
    }
}

/// Asserts every element of `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_matrix_near<T: Real, const N: usize, S>(
    actual: &Matrix<T, N, S>,
    expected: &Matrix<T, N, S>,
    tolerance: T,
) {
    for c in 0..N {
        for r in 0..N {
            let a = actual.get(r, c);
            let e = expected.get(r, c);
            let diff = (a - e).abs();
            assert!(
                diff <= tolerance,
                "element ({}, {}): {} vs {} (diff {:e} > {:e})\nactual: {}expected: {}",
                r,
                c,
                a.to_f64(),
                e.to_f64(),
                diff.to_f64(),
                tolerance.to_f64(),
                actual,
                expected
            );
        }
    }
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix3D, Vector3F};

    #[test]
    fn test_ulp_diff_adjacent() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_diff(a, b), 1);
        assert_eq!(ulp_diff(b, a), 1);
        assert_eq!(ulp_diff(-0.0, 0.0), 1);
        assert_eq!(ulp_diff_f32(1.0, f32::from_bits(1.0f32.to_bits() + 3)), 3);
    }

    #[test]
    fn test_ulp_across_sign() {
        let tiny = f64::from_bits(1);
        assert_eq!(ulp_diff(-tiny, tiny), 3);
    }

    #[test]
    fn test_float_eq() {
        assert_float_eq(0.1 + 0.2, 0.3, 1);
        assert_float_eq_f32(0.1 + 0.2, 0.3, 1);
        crate::assert_ulp_lt!(1.0 / 3.0, 0.333_333_333_333_333_3, 1);
    }

    #[test]
    #[should_panic(expected = "ULP=")]
    fn test_float_eq_fails() {
        assert_float_eq(1.0, 1.0 + 1e-12, 4);
    }

    #[test]
    fn test_near_helpers() {
        assert_vector_near(&Vector3F::new(1.0, 2.0, 3.0), &Vector3F::new(1.0, 2.0, 3.000_001), 1e-5);
        let mut m = Matrix3D::identity();
        m.set(1, 2, 1e-13);
        assert_matrix_near(&m, &Matrix3D::identity(), 1e-12);
    }

    #[test]
    #[should_panic(expected = "element (1, 2)")]
    fn test_matrix_near_reports_position() {
        let mut m = Matrix3D::identity();
        m.set(1, 2, 0.5);
        assert_matrix_near(&m, &Matrix3D::identity(), 1e-12);
    }
}

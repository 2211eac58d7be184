//! Direction helpers on top of nalgebra vectors.

use crate::{Dir3, MathError, Vec3};

/// Normalize `v`, failing on a zero-length or non-finite vector.
///
/// nalgebra's `Unit::new_normalize` would silently produce NaNs here.
/// Components are scaled by the largest magnitude first, so vectors whose
/// norm would overflow still normalize.
pub fn try_normalize(v: &Vec3) -> Result<Dir3, MathError> {
    if !v.iter().all(|c| c.is_finite()) {
        return Err(MathError::DegenerateVector);
    }
    let scale = v.amax();
    if scale == 0.0 {
        return Err(MathError::DegenerateVector);
    }
    let scaled = v / scale;
    Ok(Dir3::new_unchecked(scaled / scaled.norm()))
}

/// Angle between two vectors in radians, `acos(a·b / |a||b|)`.
///
/// Neither vector may be zero-length; the cosine is clamped so rounding
/// on (anti)parallel inputs does not produce NaN.
pub fn angle_between(a: &Vec3, b: &Vec3) -> f64 {
    let cos = a.dot(b) / (a.norm() * b.norm());
    cos.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize() {
        let d = try_normalize(&Vec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((d.as_ref().norm() - 1.0).abs() < 1e-12);
        assert!((d.as_ref().x - 0.6).abs() < 1e-12);
        assert!((d.as_ref().z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(try_normalize(&Vec3::zeros()), Err(MathError::DegenerateVector));
    }

    #[test]
    fn test_normalize_non_finite_fails() {
        let v = Vec3::new(f64::NAN, 1.0, 0.0);
        assert_eq!(try_normalize(&v), Err(MathError::DegenerateVector));
        let v = Vec3::new(f64::INFINITY, 0.0, 0.0);
        assert_eq!(try_normalize(&v), Err(MathError::DegenerateVector));
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        // |v| overflows f64 here.
        let d = try_normalize(&Vec3::new(1e300, -1e300, 0.0)).unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!((d.as_ref() - Vec3::new(h, -h, 0.0)).norm() < 1e-12);

        // |v|² underflows to zero here.
        let d = try_normalize(&Vec3::new(0.0, 0.0, 1e-200)).unwrap();
        assert!((d.as_ref() - Vec3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_angle_between() {
        assert!((angle_between(&Vec3::x(), &Vec3::y()) - PI / 2.0).abs() < 1e-12);
        assert!(angle_between(&Vec3::x(), &Vec3::new(2.0, 0.0, 0.0)).abs() < 1e-12);
        assert!((angle_between(&Vec3::x(), &-Vec3::x()) - PI).abs() < 1e-12);
        let diag = Vec3::new(1.0, 1.0, 0.0);
        assert!((angle_between(&Vec3::x(), &diag) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_vector_algebra_returns_new_values() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(Vec3::x().cross(&Vec3::y()), Vec3::z());
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    }
}

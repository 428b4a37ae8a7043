//! Trigonometry and unit helpers that work with or without `std`.

use core::f64::consts::PI;

/// Converts an angle in degrees to radians.
///
/// # Example
///
/// ```rust
/// use pendulum::degrees_to_radians;
///
/// assert!((degrees_to_radians(180.0) - core::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    x.cos()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    libm::cos(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_degree_radian_round_trip_anchors() {
        assert!((degrees_to_radians(30.0) - PI / 6.0).abs() < TOLERANCE);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < TOLERANCE);
        assert!(degrees_to_radians(0.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_trig_matches_known_values() {
        assert!((sin(PI / 6.0) - 0.5).abs() < TOLERANCE);
        assert!((cos(0.0) - 1.0).abs() < TOLERANCE);
        assert!((abs(-2.5) - 2.5).abs() < TOLERANCE);
    }

    #[cfg(feature = "libm")]
    #[test]
    fn test_backend_agrees_with_libm() {
        for i in -8..=8 {
            let x = f64::from(i) * PI / 8.0;
            assert!((sin(x) - libm::sin(x)).abs() < TOLERANCE);
            assert!((cos(x) - libm::cos(x)).abs() < TOLERANCE);
            assert!((abs(x) - libm::fabs(x)).abs() < TOLERANCE);
        }
    }
}

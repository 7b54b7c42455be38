//! Angle utilities.
//!
//! All angles here are compass bearings in degrees: 0° is north (+Y),
//! increasing clockwise through east (+X). This differs from the usual
//! counter-clockwise-from-+X convention of `atan2(y, x)`.

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Normalize an angle in degrees to [0, 360).
///
/// NaN and infinities stay non-finite.
///
/// # Example
/// ```
/// use vastu_facing::core::math::normalize_degrees;
///
/// assert_eq!(normalize_degrees(450.0), 90.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// ```
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= FULL_TURN_DEG { 0.0 } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_degrees() {
        assert_relative_eq!(normalize_degrees(0.0), 0.0);
        assert_relative_eq!(normalize_degrees(359.5), 359.5);
        assert_relative_eq!(normalize_degrees(720.0 + 45.0), 45.0);
        assert_relative_eq!(normalize_degrees(-45.0), 315.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
        assert!(normalize_degrees(f64::NAN).is_nan());
    }
}
